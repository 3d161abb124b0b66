//! Core domain logic for policyhub
//!
//! This module contains the policy service and the types it speaks.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (policies, requests, responses)
//! - `services/` - Request orchestration
//! - `ports/` - Trait definitions for external dependencies

mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::PolicyError;
