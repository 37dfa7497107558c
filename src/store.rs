//! Snapshot store for the shared list.
//!
//! Persists the list as a JSON array of strings. Loading is best-effort: a
//! missing or unreadable snapshot yields an empty list so the bot always
//! starts, with the corrupt file left on disk until the next save overwrites
//! it.

use crate::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store for the shared list snapshot.
#[derive(Debug, Clone)]
pub struct ListStore {
    path: PathBuf,
}

impl ListStore {
    /// Create a store backed by the given snapshot path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the list from disk.
    ///
    /// Returns an empty list if the file does not exist, cannot be read, or
    /// does not contain a JSON array of strings. Corruption is logged, not
    /// propagated.
    pub fn load(&self) -> Vec<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read list snapshot, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt list snapshot, starting empty");
                Vec::new()
            }
        }
    }

    /// Write the full list to disk, replacing the previous snapshot.
    pub fn save(&self, items: &[String]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
