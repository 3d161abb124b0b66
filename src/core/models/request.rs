//! Policy mutation requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Permission;

/// Source key used for policies registered without a business partner number
pub const DEFAULT_SOURCE_KEY: &str = "default";

/// Request to register a new policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPolicyRequest {
    /// Business partner the policy is registered for (`None` = default)
    #[serde(default)]
    pub business_partner_number: Option<String>,

    /// Expiry of the policy
    pub valid_until: DateTime<Utc>,

    /// The policy body
    pub payload: PolicyPayload,
}

impl RegisterPolicyRequest {
    /// The source key this policy will be stored under
    #[must_use]
    pub fn source_key(&self) -> &str {
        source_key_or_default(self.business_partner_number.as_deref())
    }
}

/// Policy body of a [`RegisterPolicyRequest`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyPayload {
    /// Requested ID; the store assigns one when absent
    #[serde(default)]
    pub policy_id: Option<String>,

    /// Permissions granted by the policy
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// Request to move policies to a business partner and/or extend their validity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePolicyRequest {
    /// Policies to update
    pub policy_ids: Vec<String>,

    /// Target business partner (`None` = default)
    #[serde(default)]
    pub business_partner_number: Option<String>,

    /// New expiry
    pub valid_until: DateTime<Utc>,
}

impl UpdatePolicyRequest {
    /// The source key the policies will be stored under
    #[must_use]
    pub fn source_key(&self) -> &str {
        source_key_or_default(self.business_partner_number.as_deref())
    }
}

fn source_key_or_default(bpn: Option<&str>) -> &str {
    match bpn {
        Some(key) if !key.trim().is_empty() => key,
        _ => DEFAULT_SOURCE_KEY,
    }
}
