//! Policy service - orchestrates policy reads and writes
//!
//! Validates input, delegates to the [`PolicyRepository`], and refreshes
//! notification contracts after every mutation. Holds no state of its own.

use crate::core::PolicyError;
use crate::core::models::{
    CreatePolicyResponse, GroupedPolicies, PolicyResponse, RegisterPolicyRequest,
    UpdatePolicyRequest, flatten_policies,
};
use crate::core::ports::{ContractRefresher, PolicyRepository};

/// Policy orchestration over a repository and a contract refresher
#[derive(Debug, Clone)]
pub struct PolicyService<R, C> {
    repository: R,
    refresher: C,
}

impl<R, C> PolicyService<R, C>
where
    R: PolicyRepository,
    C: ContractRefresher,
{
    /// Create a service from its two collaborators
    pub const fn new(repository: R, refresher: C) -> Self {
        Self {
            repository,
            refresher,
        }
    }

    /// All policies grouped by source key, exactly as the store returns them
    pub fn list_grouped_policies(&self) -> Result<GroupedPolicies, PolicyError> {
        self.repository.list_grouped().map_err(PolicyError::Store)
    }

    /// All policies as one flat list, each tagged with its source key
    pub fn list_policies(&self) -> Result<Vec<PolicyResponse>, PolicyError> {
        let grouped = self.repository.list_grouped().map_err(PolicyError::Store)?;
        Ok(flatten_policies(grouped))
    }

    /// Get a single policy
    ///
    /// Returns the first source key (in the store's iteration order) that
    /// holds the policy.
    pub fn get_policy(&self, id: &str) -> Result<PolicyResponse, PolicyError> {
        require_id(id)?;

        let lookup = self.repository.find(id).map_err(PolicyError::Store)?;

        lookup
            .into_iter()
            .find_map(|(key, policy)| policy.map(|p| PolicyResponse::from_policy(p, &key)))
            .ok_or_else(|| PolicyError::PolicyNotFound(id.to_string()))
    }

    /// Register a policy and refresh contracts
    pub fn create_policy(
        &self,
        request: Option<RegisterPolicyRequest>,
    ) -> Result<CreatePolicyResponse, PolicyError> {
        let request = request
            .ok_or_else(|| PolicyError::invalid_argument("RegisterPolicyRequest must not be null"))?;

        let created = self.repository.create(&request).map_err(PolicyError::Store)?;
        log::info!(
            "Created policy {} for {}",
            created.policy_id,
            created.business_partner_number
        );

        self.refresh_contracts()?;
        Ok(created)
    }

    /// Delete a policy and refresh contracts
    pub fn delete_policy(&self, id: &str) -> Result<(), PolicyError> {
        require_id(id)?;

        self.repository.delete(id).map_err(PolicyError::Store)?;
        log::info!("Deleted policy {id}");

        self.refresh_contracts()
    }

    /// Update policies and refresh contracts
    pub fn update_policy(&self, request: Option<UpdatePolicyRequest>) -> Result<(), PolicyError> {
        let request = request
            .ok_or_else(|| PolicyError::invalid_argument("UpdatePolicyRequest must not be null"))?;

        self.repository.update(&request).map_err(PolicyError::Store)?;
        log::info!(
            "Updated {} policy(ies) for {}",
            request.policy_ids.len(),
            request.source_key()
        );

        self.refresh_contracts()
    }

    // The store write is already committed at this point; a failure here is
    // reported but not compensated.
    fn refresh_contracts(&self) -> Result<(), PolicyError> {
        self.refresher.refresh().map_err(|e| {
            log::warn!("Notification contract refresh failed: {e:#}");
            PolicyError::Refresh(e)
        })
    }
}

fn require_id(id: &str) -> Result<(), PolicyError> {
    if id.trim().is_empty() {
        return Err(PolicyError::invalid_argument("Policy ID must not be null or empty"));
    }
    Ok(())
}

