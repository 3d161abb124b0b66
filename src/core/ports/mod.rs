//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the policy service
//! and the systems it delegates to (policy storage, contract publication).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The service depends only on these traits, never on concrete
//! implementations, so tests can substitute recording doubles and
//! the binary can wire the file-backed adapters at startup.

mod contract_refresher;
mod policy_repo;

pub use contract_refresher::ContractRefresher;
pub use policy_repo::PolicyRepository;
