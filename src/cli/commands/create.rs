//! Register a policy

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};

use policyhub::adapters::DefaultPolicyService;
use policyhub::core::models::{Permission, PolicyPayload, RegisterPolicyRequest};
use policyhub::output::{CreateResult, OutputMode};

/// Arguments of `policyhub create`
#[derive(Debug)]
pub struct CreateArgs {
    /// Business partner number
    pub bpn: Option<String>,
    /// Expiry
    pub valid_until: DateTime<Utc>,
    /// Requested policy ID
    pub policy_id: Option<String>,
    /// JSON file holding the permission list
    pub permissions: Option<PathBuf>,
}

/// Register a policy and republish contracts
pub fn create(service: &DefaultPolicyService, args: CreateArgs, mode: OutputMode) -> anyhow::Result<()> {
    let permissions = match &args.permissions {
        Some(path) => load_permissions(path)?,
        None => Vec::new(),
    };

    let request = RegisterPolicyRequest {
        business_partner_number: args.bpn,
        valid_until: args.valid_until,
        payload: PolicyPayload {
            policy_id: args.policy_id,
            permissions,
        },
    };

    let created = service.create_policy(Some(request))?;
    CreateResult { created }.render(mode);
    Ok(())
}

fn load_permissions(path: &Path) -> anyhow::Result<Vec<Permission>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON permission list", path.display()))
}
