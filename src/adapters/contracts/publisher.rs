//! File-backed contract publisher

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use crate::core::ports::{ContractRefresher, PolicyRepository};

use super::definition::build_definitions;

/// Publishes notification contract definitions as a JSON document
///
/// Reads the current policies from its own handle on the repository, so
/// it can be wired next to a [`PolicyService`](crate::core::services::PolicyService)
/// that shares the same store.
#[derive(Debug, Clone)]
pub struct FileContractPublisher<R> {
    repository: R,
    output: PathBuf,
}

impl<R: PolicyRepository> FileContractPublisher<R> {
    /// Create a publisher writing to `output`
    pub const fn new(repository: R, output: PathBuf) -> Self {
        Self { repository, output }
    }

    /// Path of the published document
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl<R: PolicyRepository> ContractRefresher for FileContractPublisher<R> {
    fn refresh(&self) -> anyhow::Result<()> {
        let policies = self
            .repository
            .list_grouped()
            .context("failed to read policies for contract refresh")?;
        let definitions = build_definitions(&policies, Utc::now());

        if let Some(dir) = self.output.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let json = serde_json::to_string_pretty(&definitions)?;
        fs::write(&self.output, json)
            .with_context(|| format!("failed to write {}", self.output.display()))?;

        log::info!(
            "Published {} notification contract definition(s) covering {} policy(ies) to {}",
            definitions.contracts.len(),
            definitions.contracts.first().map_or(0, |c| c.access_policy_ids.len()),
            self.output.display()
        );
        Ok(())
    }
}
