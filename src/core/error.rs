//! Policy service errors

/// Errors surfaced by [`PolicyService`](super::services::PolicyService)
///
/// `InvalidArgument` and `PolicyNotFound` are raised by the service itself.
/// Store and refresher failures are passed through untouched, tagged only
/// with where they came from.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// A required identifier or request was missing or blank
    #[error("{0}")]
    InvalidArgument(String),

    /// No source key holds a policy with this ID
    #[error("Policy with id: {0} not found.")]
    PolicyNotFound(String),

    /// The policy store failed
    #[error("policy store failed: {0:#}")]
    Store(anyhow::Error),

    /// Contract refresh failed after the store was already updated
    #[error("contract refresh failed: {0:#}")]
    Refresh(anyhow::Error),
}

impl PolicyError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
