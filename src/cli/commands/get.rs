//! Show a single policy

use policyhub::adapters::DefaultPolicyService;
use policyhub::output::{OutputMode, PolicyDetailResult};

/// Show a policy by ID
pub fn get(service: &DefaultPolicyService, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let policy = service.get_policy(id)?;
    PolicyDetailResult { policy }.render(mode);
    Ok(())
}
