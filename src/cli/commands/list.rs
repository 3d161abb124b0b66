//! List policies, flat or grouped by business partner

use policyhub::adapters::DefaultPolicyService;
use policyhub::output::{GroupedPolicyResult, OutputMode, PolicyListResult};

/// List all policies
pub fn list(service: &DefaultPolicyService, grouped: bool, mode: OutputMode) -> anyhow::Result<()> {
    if grouped {
        let policies = service.list_grouped_policies()?;
        GroupedPolicyResult { policies }.render(mode);
    } else {
        let policies = service.list_policies()?;
        PolicyListResult { policies }.render(mode);
    }
    Ok(())
}
