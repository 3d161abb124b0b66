//! Policy response shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GroupedPolicies, IrsPolicy, Permission};

/// A policy paired with the source key it is stored under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResponse {
    /// Policy ID
    pub policy_id: String,
    /// When the policy was registered
    pub created_on: DateTime<Utc>,
    /// Expiry
    pub valid_until: DateTime<Utc>,
    /// Permissions
    pub permissions: Vec<Permission>,
    /// Source key (business partner number)
    pub business_partner_number: String,
}

impl PolicyResponse {
    /// Project a stored policy under its source key
    #[must_use]
    pub fn from_policy(policy: IrsPolicy, key: &str) -> Self {
        Self {
            policy_id: policy.policy_id,
            created_on: policy.created_on,
            valid_until: policy.valid_until,
            permissions: policy.permissions,
            business_partner_number: key.to_string(),
        }
    }
}

/// Flatten a grouped mapping, key order first, then list order
#[must_use]
pub fn flatten_policies(grouped: GroupedPolicies) -> Vec<PolicyResponse> {
    grouped
        .into_iter()
        .flat_map(|(key, policies)| {
            policies.into_iter().map(move |p| PolicyResponse::from_policy(p, &key))
        })
        .collect()
}

/// What the store reports after registering a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePolicyResponse {
    /// Assigned policy ID
    pub policy_id: String,
    /// Registration time
    pub created_on: DateTime<Utc>,
    /// Expiry, as requested
    pub valid_until: DateTime<Utc>,
    /// Source key the policy was stored under
    pub business_partner_number: String,
}
