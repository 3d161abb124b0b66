//! Domain models for policyhub
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`IrsPolicy`] - A stored policy as the store hands it out
//! - [`PolicyResponse`] - A policy paired with the source key it was found under
//! - [`RegisterPolicyRequest`] / [`UpdatePolicyRequest`] - Mutation inputs
//! - [`CreatePolicyResponse`] - What the store reports after a create

mod policy;
mod request;
mod response;

pub use policy::{Constraint, Constraints, IrsPolicy, Permission, PolicyAction};
pub use request::{DEFAULT_SOURCE_KEY, PolicyPayload, RegisterPolicyRequest, UpdatePolicyRequest};
pub use response::{CreatePolicyResponse, PolicyResponse, flatten_policies};

use std::collections::BTreeMap;

/// Policies grouped by source key (business partner number)
pub type GroupedPolicies = BTreeMap<String, Vec<IrsPolicy>>;

/// Result of looking a policy up by ID: one entry per known source key
pub type PolicyLookup = BTreeMap<String, Option<IrsPolicy>>;
