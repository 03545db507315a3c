//! Error types for importing field trees from text.

use thiserror::Error;

/// Reasons an import is rejected.
///
/// The `Display` text of each variant is the message shown to the user.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not valid JSON
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },

    /// The text is not valid YAML
    #[error("Invalid YAML: {reason}")]
    InvalidYaml { reason: String },

    /// A JSON import whose top level is not an array
    #[error("JSON must be an array of field objects")]
    NotAnArray,

    /// A YAML document whose top level is not a mapping
    #[error("YAML must be a mapping of keys to values")]
    NotAMapping,

    /// An element that is not a well-formed field
    #[error(
        "Invalid field structure. Each field must have name and type properties. ({location}: {reason})"
    )]
    InvalidFieldStructure { location: String, reason: String },
}

impl ImportError {
    /// Check if the text could not be parsed at all
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ImportError::InvalidJson { .. } | ImportError::InvalidYaml { .. }
        )
    }

    /// Check if the text parsed but has the wrong overall shape
    pub fn is_shape_error(&self) -> bool {
        matches!(self, ImportError::NotAnArray | ImportError::NotAMapping)
    }

    /// Check if an individual field is malformed
    pub fn is_field_error(&self) -> bool {
        matches!(self, ImportError::InvalidFieldStructure { .. })
    }

    /// Location of the offending field, e.g. `[2].children[0]`
    pub fn location(&self) -> Option<&str> {
        match self {
            ImportError::InvalidFieldStructure { location, .. } => Some(location),
            _ => None,
        }
    }
}

impl From<ImportError> for crate::Error {
    fn from(err: ImportError) -> Self {
        crate::Error::Import(err)
    }
}
