//! Business logic services
//!
//! - [`policy_service`] - Validate, delegate to the store, refresh contracts

pub mod policy_service;

pub use policy_service::PolicyService;
