//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.
//! Request bodies reuse the domain request types directly.

use serde::{Deserialize, Serialize};

use crate::core::models::PolicyResponse;

use super::error::{ApiError, ApiErrorData};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

// =============================================================================
// RESPONSE DATA
// =============================================================================

/// Flat policy listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoliciesData {
    /// Number of entries in `policies`
    pub count: usize,
    /// Policies, each tagged with its business partner number
    pub policies: Vec<PolicyResponse>,
}

/// Result of an update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedData {
    /// Policies that were updated
    pub policy_ids: Vec<String>,
    /// Always true
    pub updated: bool,
}

/// Result of a delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedData {
    /// The deleted policy
    pub id: String,
    /// Always true
    pub deleted: bool,
}
