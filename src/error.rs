//! Error types for the application.

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Errors related to the list snapshot store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors returned by shared-list mutations.
#[derive(Error, Debug)]
pub enum ListError {
    /// The 1-based index was outside the current list. The list is unchanged.
    #[error("index {index} is out of range for a list of {len} items")]
    IndexOutOfRange { index: i64, len: usize },

    /// The item was removed in memory but the snapshot write failed; on-disk
    /// state lags until the next successful save.
    #[error("removed {item:?} but failed to save the list: {source}")]
    SaveFailed {
        item: String,
        #[source]
        source: StoreError,
    },
}
