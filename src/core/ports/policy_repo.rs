//! Policy repository port
//!
//! Defines the interface for persisting and retrieving policies.

use std::sync::Arc;

use super::super::models::{
    CreatePolicyResponse, GroupedPolicies, PolicyLookup, RegisterPolicyRequest,
    UpdatePolicyRequest,
};

/// Repository for managing policies
///
/// Policies are keyed by ID and grouped by source key (business partner
/// number). Not-found and idempotency rules for mutations are decided by
/// the implementation.
pub trait PolicyRepository: Send + Sync {
    /// All policies, grouped by source key
    fn list_grouped(&self) -> anyhow::Result<GroupedPolicies>;

    /// Look a policy up under every known source key
    ///
    /// The iteration order of the returned map is the order callers scan in.
    fn find(&self, id: &str) -> anyhow::Result<PolicyLookup>;

    /// Register a new policy
    fn create(&self, request: &RegisterPolicyRequest) -> anyhow::Result<CreatePolicyResponse>;

    /// Apply an update to existing policies
    fn update(&self, request: &UpdatePolicyRequest) -> anyhow::Result<()>;

    /// Remove a policy by ID
    fn delete(&self, id: &str) -> anyhow::Result<()>;
}

impl<T: PolicyRepository + ?Sized> PolicyRepository for Arc<T> {
    fn list_grouped(&self) -> anyhow::Result<GroupedPolicies> {
        (**self).list_grouped()
    }

    fn find(&self, id: &str) -> anyhow::Result<PolicyLookup> {
        (**self).find(id)
    }

    fn create(&self, request: &RegisterPolicyRequest) -> anyhow::Result<CreatePolicyResponse> {
        (**self).create(request)
    }

    fn update(&self, request: &UpdatePolicyRequest) -> anyhow::Result<()> {
        (**self).update(request)
    }

    fn delete(&self, id: &str) -> anyhow::Result<()> {
        (**self).delete(id)
    }
}
