//! Error types for signing-form operations

use thiserror::Error;

/// Errors surfaced by the signing-options model.
///
/// These reflect user-correctable environment conditions, not program
/// defects: the UI host presents them (typically as a modal) and the user
/// fixes the environment. Nothing here is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningError {
    /// An operation needs an SDK and none is configured.
    #[error("an SDK is required to {purpose}")]
    SdkUnavailable { purpose: String },
}

impl SigningError {
    /// Create an SDK-unavailable error
    pub fn sdk_unavailable(purpose: impl Into<String>) -> Self {
        Self::SdkUnavailable {
            purpose: purpose.into(),
        }
    }

    /// Whether the user can resolve this without a code change.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, SigningError::SdkUnavailable { .. })
    }
}
