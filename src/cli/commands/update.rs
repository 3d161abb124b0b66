//! Update policies

use chrono::{DateTime, Utc};

use policyhub::adapters::DefaultPolicyService;
use policyhub::core::models::UpdatePolicyRequest;
use policyhub::output::{OperationResult, OutputMode};

/// Move policies to a business partner and set their expiry
pub fn update(
    service: &DefaultPolicyService,
    ids: Vec<String>,
    bpn: Option<String>,
    valid_until: DateTime<Utc>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let request = UpdatePolicyRequest {
        policy_ids: ids,
        business_partner_number: bpn,
        valid_until,
    };
    let message = format!(
        "Updated {} policy(ies) under {}",
        request.policy_ids.len(),
        request.source_key()
    );

    service.update_policy(Some(request))?;
    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
