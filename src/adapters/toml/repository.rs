//! TOML-based policy repository
//!
//! Implements the `PolicyRepository` port trait on a single policy file.
//! Every call re-reads the file, so several processes see each other's
//! writes; there is no locking between them.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::core::models::{
    CreatePolicyResponse, GroupedPolicies, IrsPolicy, PolicyLookup, RegisterPolicyRequest,
    UpdatePolicyRequest,
};
use crate::core::ports::PolicyRepository;

use super::store_file::{PolicyFile, StoreError, load_file, save_file};

/// Policy repository backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlPolicyRepository {
    path: PathBuf,
}

impl TomlPolicyRepository {
    /// Create a repository over the given file (it need not exist yet)
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<PolicyFile, StoreError> {
        load_file(&self.path)
    }

    fn save(&self, file: &PolicyFile) -> Result<(), StoreError> {
        save_file(&self.path, file)
    }
}

impl PolicyRepository for TomlPolicyRepository {
    fn list_grouped(&self) -> anyhow::Result<GroupedPolicies> {
        Ok(self.load()?.policies)
    }

    fn find(&self, id: &str) -> anyhow::Result<PolicyLookup> {
        let file = self.load()?;

        Ok(file
            .policies
            .into_iter()
            .map(|(key, policies)| {
                let found = policies.into_iter().find(|p| p.policy_id == id);
                (key, found)
            })
            .collect())
    }

    fn create(&self, request: &RegisterPolicyRequest) -> anyhow::Result<CreatePolicyResponse> {
        let mut file = self.load()?;

        let policy_id = match request.payload.policy_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => {
                if contains_policy(&file, id) {
                    return Err(StoreError::Duplicate(id.to_string()).into());
                }
                id.to_string()
            },
            _ => generate_id(&file),
        };

        let key = request.source_key().to_string();
        let policy = IrsPolicy {
            policy_id: policy_id.clone(),
            created_on: Utc::now(),
            valid_until: request.valid_until,
            permissions: request.payload.permissions.clone(),
        };
        let created_on = policy.created_on;

        file.policies.entry(key.clone()).or_default().push(policy);
        self.save(&file)?;

        log::debug!("Stored policy {policy_id} under {key} in {}", self.path.display());

        Ok(CreatePolicyResponse {
            policy_id,
            created_on,
            valid_until: request.valid_until,
            business_partner_number: key,
        })
    }

    fn update(&self, request: &UpdatePolicyRequest) -> anyhow::Result<()> {
        let mut file = self.load()?;

        // Validate everything up front so a partial update is never written
        if let Some(missing) = request.policy_ids.iter().find(|id| !contains_policy(&file, id)) {
            return Err(StoreError::NotFound(missing.clone()).into());
        }

        let mut moved = Vec::with_capacity(request.policy_ids.len());
        for policies in file.policies.values_mut() {
            let (taken, kept): (Vec<_>, Vec<_>) = policies
                .drain(..)
                .partition(|p| request.policy_ids.contains(&p.policy_id));
            *policies = kept;
            moved.extend(taken);
        }

        let target = file.policies.entry(request.source_key().to_string()).or_default();
        for mut policy in moved {
            policy.valid_until = request.valid_until;
            target.push(policy);
        }

        prune_empty_groups(&mut file);
        self.save(&file)?;
        Ok(())
    }

    fn delete(&self, id: &str) -> anyhow::Result<()> {
        let mut file = self.load()?;

        if !contains_policy(&file, id) {
            return Err(StoreError::NotFound(id.to_string()).into());
        }

        for policies in file.policies.values_mut() {
            policies.retain(|p| p.policy_id != id);
        }

        prune_empty_groups(&mut file);
        self.save(&file)?;
        Ok(())
    }
}

fn contains_policy(file: &PolicyFile, id: &str) -> bool {
    file.policies.values().flatten().any(|p| p.policy_id == id)
}

fn prune_empty_groups(file: &mut PolicyFile) {
    file.policies.retain(|_, policies| !policies.is_empty());
}

fn generate_id(file: &PolicyFile) -> String {
    let ts = Utc::now().timestamp_millis();
    let base = format!("p{ts:x}");

    let mut candidate = base.clone();
    let mut n = 1;
    while contains_policy(file, &candidate) {
        n += 1;
        candidate = format!("{base}-{n}");
    }
    candidate
}
