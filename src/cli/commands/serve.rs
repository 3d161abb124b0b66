//! Serve the HTTP API

use policyhub::adapters::DefaultPolicyService;

use crate::server::tiny_http;

/// Start the HTTP API server
pub fn serve(service: &DefaultPolicyService, addr: &str) -> anyhow::Result<()> {
    println!("Serving policy API on http://{addr}/api/v1/policies");
    println!("Press Ctrl+C to stop");
    tiny_http::serve(service, addr)
}
