//! Error types for share link generation.

use thiserror::Error;

/// Errors raised while producing a share link.
///
/// Decoding never fails with an error; an unreadable token decodes to `None`.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ShareError {
    /// The form could not be serialized or compressed
    #[error("Failed to generate share link: {reason}")]
    Encode { reason: String },

    /// The configured origin is not an absolute URL that can carry a path
    #[error("Invalid share origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

impl ShareError {
    pub(crate) fn encode(reason: impl std::fmt::Display) -> Self {
        ShareError::Encode {
            reason: reason.to_string(),
        }
    }

    /// Check if this error came from serializing or compressing the form
    pub fn is_encode_error(&self) -> bool {
        matches!(self, ShareError::Encode { .. })
    }

    /// Check if this error is caused by share configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, ShareError::InvalidOrigin { .. })
    }
}

impl From<ShareError> for crate::Error {
    fn from(err: ShareError) -> Self {
        crate::Error::Share(err)
    }
}
