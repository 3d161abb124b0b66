//! Delete a policy

use policyhub::adapters::DefaultPolicyService;
use policyhub::output::{OperationResult, OutputMode};

/// Delete a policy by ID and republish contracts
pub fn delete(service: &DefaultPolicyService, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    service.delete_policy(id)?;
    OperationResult {
        success: true,
        message: format!("Deleted policy {id}"),
    }
    .render(mode);
    Ok(())
}
