//! Key-value persistence for the stored collections
//!
//! Each collection lives under its own key as one JSON file holding the
//! serialized array. Reads are forgiving (anything unreadable is "no data");
//! writes replace the whole file.

use std::fs;
use std::path::{Path, PathBuf};

use logger::{debug, verbose, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::StoreError;

/// Storage key for the course type collection.
pub const COURSE_TYPES_KEY: &str = "courseTypes";
/// Storage key for the course collection.
pub const COURSES_KEY: &str = "courses";
/// Storage key for the offering collection.
pub const OFFERINGS_KEY: &str = "offerings";
/// Storage key for the student collection.
pub const STUDENTS_KEY: &str = "students";

/// File-backed store mapping keys to JSON arrays.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Create a store rooted at `root`. Nothing is touched on disk until
    /// the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the store reads and writes under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the collection stored under `key`.
    ///
    /// A key that was never written reads as empty. A file that cannot be
    /// read or parsed also reads as empty, with a warning, so one corrupt
    /// collection never takes the rest of the data down.
    pub fn load<T>(&self, key: &str) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("No stored data for '{key}', starting empty");
            return Vec::new();
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read '{}': {e}", path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Could not parse '{}': {e}", path.display());
                Vec::new()
            }
        }
    }

    /// Persist `records` under `key`, replacing whatever was there.
    ///
    /// The root directory is created on demand.
    pub fn save<T>(&self, key: &str, records: &[T]) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let payload = serde_json::to_string(records).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, payload).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })?;
        verbose!("Saved {} record(s) to {}", records.len(), path.display());
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}
