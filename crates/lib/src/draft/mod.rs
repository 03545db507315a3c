//! Persistence of the in-progress form between sessions.
//!
//! A draft is the serialized field tree plus the time it was saved. Stores
//! never fail loudly: a draft that cannot be written, read or parsed is logged
//! with `warn!` and treated as absent, so a broken store degrades to "no draft"
//! instead of interrupting editing.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{
    clock::{Clock, SystemClock},
    field::Field,
};

mod errors;
mod file;

pub use errors::DraftError;
pub use file::{DRAFT_FILE, FileDraftStore, TIMESTAMP_FILE};

/// Storage for a single form draft.
pub trait DraftStore: Send + Sync {
    /// Replaces the stored draft and records the save time.
    fn save(&self, fields: &[Field]);

    /// The stored draft, or `None` if there is none or it cannot be read.
    fn load(&self) -> Option<Vec<Field>>;

    /// When the draft was last saved.
    fn last_saved(&self) -> Option<DateTime<Utc>>;

    /// Returns true if a draft is stored, whether or not it parses.
    fn has_draft(&self) -> bool;

    /// Removes the draft and its timestamp.
    fn clear(&self);
}

#[derive(Debug, Clone)]
struct StoredDraft {
    json: String,
    saved_at: i64,
}

/// A draft store that lives only as long as the process.
///
/// Drafts are kept serialized, so a loaded draft never aliases the saved tree.
#[derive(Debug)]
pub struct InMemoryDraftStore {
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<StoredDraft>>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            slot: RwLock::new(None),
        }
    }
}

impl Default for InMemoryDraftStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftStore for InMemoryDraftStore {
    fn save(&self, fields: &[Field]) {
        let json = match serde_json::to_string(fields) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to save draft");
                return;
            }
        };
        let draft = StoredDraft {
            json,
            saved_at: self.clock.now_millis(),
        };
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(draft);
    }

    fn load(&self) -> Option<Vec<Field>> {
        let json = self
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|draft| draft.json.clone())?;
        match serde_json::from_str(&json) {
            Ok(fields) => Some(fields),
            Err(err) => {
                warn!(error = %err, "failed to load draft");
                None
            }
        }
    }

    fn last_saved(&self) -> Option<DateTime<Utc>> {
        let saved_at = self
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|draft| draft.saved_at)?;
        DateTime::from_timestamp_millis(saved_at)
    }

    fn has_draft(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
