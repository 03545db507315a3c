//!
//! formtree: the core of a browser form builder.
//! This library models a form as a tree of typed fields and provides everything an editor needs to work with it.
//!
//! ## Core Concepts
//!
//! * **Fields (`field::Field`)**: Nodes of the form tree. Scalars (text, number, boolean, enum, multiselect) hold a value; objects and arrays hold children.
//! * **Paths (`path`)**: Dot-joined field names (`server.ports.0`) that address a node from the root. Every operation locates its target by path.
//! * **Tree operations (`tree`)**: Pure functions that return an updated copy of the tree: value updates, array item management, search and outline state.
//! * **Validation (`validation`)**: Required-field checks and per-field regex patterns that fail open when a pattern is malformed.
//! * **Projection (`projection`, `export`)**: The plain data a form describes, rendered as JSON, YAML or KYAML, and the inverse inference used for YAML import.
//! * **Import (`import`)**: Structural validation of JSON field trees and type inference from YAML documents.
//! * **Sharing (`share`)**: Compressed, URL-safe tokens that carry a whole form in the fragment of a link.
//! * **Drafts (`draft`)**: Silent, best-effort persistence of the form being edited.
//! * **Sessions (`builder::FormBuilder`)**: An editing session that ties the above together.

pub mod builder;
pub mod clock;
pub mod draft;
pub mod export;
pub mod field;
pub mod import;
pub mod path;
pub mod projection;
pub mod share;
pub mod templates;
pub mod tree;
pub mod validation;

pub use builder::FormBuilder;
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock};
pub use field::{Field, FieldType};

/// Result type used throughout the formtree library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the formtree library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Structured share link errors from the share module
    #[error(transparent)]
    Share(share::ShareError),

    /// Structured import errors from the import module
    #[error(transparent)]
    Import(import::ImportError),

    /// Structured draft persistence errors from the draft module
    #[error(transparent)]
    Draft(draft::DraftError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Share(_) => "share",
            Error::Import(_) => "import",
            Error::Draft(_) => "draft",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Yaml(_) => "yaml",
            Error::Format(_) => "format",
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Draft(draft_err) => draft_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error came from (de)serializing data.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) | Error::Yaml(_) | Error::Format(_) => true,
            Error::Share(share_err) => share_err.is_encode_error(),
            Error::Draft(draft_err) => draft_err.is_serialization_error(),
            Error::Import(import_err) => import_err.is_parse_error(),
            _ => false,
        }
    }

    /// Check if this error rejects user-supplied input.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Import(_) => true,
            Error::Draft(draft_err) => draft_err.is_corrupt(),
            _ => false,
        }
    }

    /// Check if this error is caused by configuration.
    pub fn is_config_error(&self) -> bool {
        match self {
            Error::Share(share_err) => share_err.is_config_error(),
            _ => false,
        }
    }
}
