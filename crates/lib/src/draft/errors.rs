//! Error types for draft persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by draft stores.
///
/// The [`DraftStore`](super::DraftStore) operations log and swallow these;
/// they surface only from constructors and the fallible `try_*` methods of
/// concrete stores.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DraftError {
    /// Reading or writing a draft file failed
    #[error("Draft I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fields could not be serialized
    #[error("Failed to serialize draft: {reason}")]
    Serialize { reason: String },

    /// A stored draft or timestamp could not be read back
    #[error("Corrupt draft data at {location}: {reason}")]
    Corrupt { location: String, reason: String },
}

impl DraftError {
    /// Check if this error is I/O related
    pub fn is_io_error(&self) -> bool {
        matches!(self, DraftError::Io { .. })
    }

    /// Check if stored data could not be decoded
    pub fn is_corrupt(&self) -> bool {
        matches!(self, DraftError::Corrupt { .. })
    }

    /// Check if this error happened while serializing
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, DraftError::Serialize { .. })
    }
}

impl From<DraftError> for crate::Error {
    fn from(err: DraftError) -> Self {
        crate::Error::Draft(err)
    }
}
