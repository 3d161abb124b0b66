//! Pure API handlers
//!
//! These handlers are HTTP-agnostic: they take typed input and a policy
//! service, and return `Result<T, ApiError>`.

use crate::core::models::{
    CreatePolicyResponse, GroupedPolicies, PolicyResponse, RegisterPolicyRequest,
    UpdatePolicyRequest,
};
use crate::core::ports::{ContractRefresher, PolicyRepository};
use crate::core::services::PolicyService;

use super::error::ApiError;
use super::types::{DeletedData, PoliciesData, UpdatedData};

// =============================================================================
// READS
// =============================================================================

/// List all policies as a flat list
pub fn list_policies<R, C>(service: &PolicyService<R, C>) -> Result<PoliciesData, ApiError>
where
    R: PolicyRepository,
    C: ContractRefresher,
{
    let policies = service.list_policies()?;
    Ok(PoliciesData {
        count: policies.len(),
        policies,
    })
}

/// List all policies grouped by business partner number
pub fn list_grouped_policies<R, C>(
    service: &PolicyService<R, C>,
) -> Result<GroupedPolicies, ApiError>
where
    R: PolicyRepository,
    C: ContractRefresher,
{
    Ok(service.list_grouped_policies()?)
}

/// Get a single policy by ID
pub fn get_policy<R, C>(service: &PolicyService<R, C>, id: &str) -> Result<PolicyResponse, ApiError>
where
    R: PolicyRepository,
    C: ContractRefresher,
{
    Ok(service.get_policy(id)?)
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Register a policy
///
/// `None` models a request whose body was JSON `null`.
pub fn create_policy<R, C>(
    service: &PolicyService<R, C>,
    req: Option<RegisterPolicyRequest>,
) -> Result<CreatePolicyResponse, ApiError>
where
    R: PolicyRepository,
    C: ContractRefresher,
{
    Ok(service.create_policy(req)?)
}

/// Update policies
pub fn update_policy<R, C>(
    service: &PolicyService<R, C>,
    req: Option<UpdatePolicyRequest>,
) -> Result<UpdatedData, ApiError>
where
    R: PolicyRepository,
    C: ContractRefresher,
{
    let policy_ids = req.as_ref().map(|r| r.policy_ids.clone()).unwrap_or_default();
    service.update_policy(req)?;
    Ok(UpdatedData {
        policy_ids,
        updated: true,
    })
}

/// Delete a policy by ID
pub fn delete_policy<R, C>(service: &PolicyService<R, C>, id: &str) -> Result<DeletedData, ApiError>
where
    R: PolicyRepository,
    C: ContractRefresher,
{
    service.delete_policy(id)?;
    Ok(DeletedData {
        id: id.to_string(),
        deleted: true,
    })
}
