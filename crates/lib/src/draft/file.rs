//! Draft store backed by two files in a directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::{DraftError, DraftStore};
use crate::{
    clock::{Clock, SystemClock},
    field::Field,
};

/// File holding the serialized field tree.
pub const DRAFT_FILE: &str = "form_draft.json";

/// File holding the save time in milliseconds since the Unix epoch.
pub const TIMESTAMP_FILE: &str = "form_draft_timestamp";

/// Stores the draft as `form_draft.json` and `form_draft_timestamp` in a
/// directory.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileDraftStore {
    /// Opens a store in `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DraftError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| DraftError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn draft_path(&self) -> PathBuf {
        self.dir.join(DRAFT_FILE)
    }

    pub fn timestamp_path(&self) -> PathBuf {
        self.dir.join(TIMESTAMP_FILE)
    }

    /// Writes the draft, reporting failures.
    pub fn try_save(&self, fields: &[Field]) -> Result<(), DraftError> {
        let json = serde_json::to_string(fields).map_err(|err| DraftError::Serialize {
            reason: err.to_string(),
        })?;
        write_file(&self.draft_path(), &json)?;
        write_file(&self.timestamp_path(), &self.clock.now_millis().to_string())?;
        debug!(dir = %self.dir.display(), "saved draft");
        Ok(())
    }

    /// Reads the draft, reporting failures. A missing draft is `Ok(None)`.
    pub fn try_load(&self) -> Result<Option<Vec<Field>>, DraftError> {
        let path = self.draft_path();
        let Some(json) = read_optional(&path)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|err| DraftError::Corrupt {
                location: path.display().to_string(),
                reason: err.to_string(),
            })
    }

    /// Reads the save time, reporting failures. A missing timestamp is
    /// `Ok(None)`.
    pub fn try_last_saved(&self) -> Result<Option<DateTime<Utc>>, DraftError> {
        let path = self.timestamp_path();
        let Some(text) = read_optional(&path)? else {
            return Ok(None);
        };
        let corrupt = |reason: String| DraftError::Corrupt {
            location: path.display().to_string(),
            reason,
        };
        let millis: i64 = text.trim().parse().map_err(|err| corrupt(format!("{err}")))?;
        DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| corrupt(format!("timestamp {millis} out of range")))
    }

    /// Removes both files, reporting failures. Files that are already gone
    /// are not an error.
    pub fn try_clear(&self) -> Result<(), DraftError> {
        remove_optional(&self.draft_path())?;
        remove_optional(&self.timestamp_path())
    }
}

impl DraftStore for FileDraftStore {
    fn save(&self, fields: &[Field]) {
        if let Err(err) = self.try_save(fields) {
            warn!(error = %err, "failed to save draft");
        }
    }

    fn load(&self) -> Option<Vec<Field>> {
        self.try_load().unwrap_or_else(|err| {
            warn!(error = %err, "failed to load draft");
            None
        })
    }

    fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.try_last_saved().unwrap_or_else(|err| {
            warn!(error = %err, "failed to read draft timestamp");
            None
        })
    }

    fn has_draft(&self) -> bool {
        self.draft_path().is_file()
    }

    fn clear(&self) {
        if let Err(err) = self.try_clear() {
            warn!(error = %err, "failed to clear draft");
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), DraftError> {
    fs::write(path, contents).map_err(|source| DraftError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional(path: &Path) -> Result<Option<String>, DraftError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(DraftError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn remove_optional(path: &Path) -> Result<(), DraftError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(DraftError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
