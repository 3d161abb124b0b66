//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and handlers
//! that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by clients.
//!
//! ## Design
//!
//! - **Handlers are thin**: Take typed input, call the policy service, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    create_policy, delete_policy, get_policy, list_grouped_policies, list_policies, update_policy,
};
pub use types::{ApiResponse, DeletedData, PoliciesData, UpdatedData};
