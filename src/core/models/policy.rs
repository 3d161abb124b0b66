//! Policy model
//!
//! A policy is a set of usage/access permissions, each guarded by
//! constraints, valid until a fixed point in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored policy record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrsPolicy {
    /// Unique identifier
    pub policy_id: String,

    /// When the policy was registered
    pub created_on: DateTime<Utc>,

    /// Expiry of the policy
    pub valid_until: DateTime<Utc>,

    /// Permissions granted by this policy
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl IrsPolicy {
    /// Whether the policy is still valid at `now`
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_until > now
    }
}

/// A single permission inside a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// What the permission allows
    pub action: PolicyAction,

    /// Conditions under which it applies
    #[serde(default)]
    pub constraints: Constraints,
}

/// Permission action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    /// Data usage
    #[default]
    Use,
    /// Data access
    Access,
}

impl std::fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Use => write!(f, "use"),
            Self::Access => write!(f, "access"),
        }
    }
}

/// Constraint groups of a permission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    /// All of these must hold
    #[serde(default)]
    pub and: Vec<Constraint>,

    /// At least one of these must hold
    #[serde(default)]
    pub or: Vec<Constraint>,
}

/// A single `left operator right` condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Left operand (e.g. `FrameworkAgreement`)
    pub left_operand: String,
    /// Operator (e.g. `eq`)
    pub operator: String,
    /// Right operand (e.g. `traceability:1.0`)
    pub right_operand: String,
}

impl Constraint {
    /// Create a constraint
    #[must_use]
    pub fn new(left_operand: &str, operator: &str, right_operand: &str) -> Self {
        Self {
            left_operand: left_operand.to_string(),
            operator: operator.to_string(),
            right_operand: right_operand.to_string(),
        }
    }
}
