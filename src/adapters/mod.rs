//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - Policy store on a TOML file
//! - `contracts/` - Notification contract publication to a JSON file
//!
//! [`build_service`] wires both behind a [`PolicyService`].

pub mod contracts;
pub mod toml;

use std::sync::Arc;

use crate::config::Config;
use crate::core::services::PolicyService;

use self::contracts::FileContractPublisher;
use self::toml::TomlPolicyRepository;

/// The policy service as wired by the binary
pub type DefaultPolicyService =
    PolicyService<Arc<TomlPolicyRepository>, FileContractPublisher<Arc<TomlPolicyRepository>>>;

/// Wire the file-backed store and contract publisher from configuration
///
/// The store is shared between the service and the publisher so a refresh
/// always sees the write that triggered it.
#[must_use]
pub fn build_service(config: &Config) -> DefaultPolicyService {
    let repository = Arc::new(TomlPolicyRepository::new(config.store.path.clone()));
    let publisher = FileContractPublisher::new(Arc::clone(&repository), config.contracts.path.clone());

    log::debug!(
        "Policy store at {}, contracts published to {}",
        config.store.path.display(),
        config.contracts.path.display()
    );

    PolicyService::new(repository, publisher)
}
