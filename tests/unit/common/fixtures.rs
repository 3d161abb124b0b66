//! Test fixtures and builders

use chrono::{DateTime, Duration, TimeZone, Utc};

use policyhub::core::models::{
    Constraint, Constraints, CreatePolicyResponse, IrsPolicy, Permission, PolicyAction,
    PolicyPayload, RegisterPolicyRequest, UpdatePolicyRequest,
};

/// A fixed timestamp so assertions are deterministic
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// A policy with one usage permission
pub fn policy(id: &str) -> IrsPolicy {
    IrsPolicy {
        policy_id: id.to_string(),
        created_on: t0(),
        valid_until: t0() + Duration::days(365),
        permissions: vec![Permission {
            action: PolicyAction::Use,
            constraints: Constraints {
                and: vec![Constraint::new("FrameworkAgreement", "eq", "traceability:1.0")],
                or: Vec::new(),
            },
        }],
    }
}

/// A register request for `bpn`
pub fn register_request(bpn: Option<&str>, policy_id: Option<&str>) -> RegisterPolicyRequest {
    RegisterPolicyRequest {
        business_partner_number: bpn.map(String::from),
        valid_until: t0() + Duration::days(365),
        payload: PolicyPayload {
            policy_id: policy_id.map(String::from),
            permissions: policy("unused").permissions,
        },
    }
}

/// An update request moving `ids` to `bpn`
pub fn update_request(ids: &[&str], bpn: Option<&str>) -> UpdatePolicyRequest {
    UpdatePolicyRequest {
        policy_ids: ids.iter().map(|s| (*s).to_string()).collect(),
        business_partner_number: bpn.map(String::from),
        valid_until: t0() + Duration::days(730),
    }
}

/// A canned store response for a create
pub fn created(id: &str, bpn: &str) -> CreatePolicyResponse {
    CreatePolicyResponse {
        policy_id: id.to_string(),
        created_on: t0(),
        valid_until: t0() + Duration::days(365),
        business_partner_number: bpn.to_string(),
    }
}
