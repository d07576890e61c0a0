//! Error types for Sharetree
//!
//! The tree, size, row-state and selection layers are infallible. Only the
//! edges (snapshot files, config files, path lookups) return these.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sharetree operations
pub type ShareTreeResult<T> = Result<T, ShareTreeError>;

/// Main error type for Sharetree operations
#[derive(Error, Debug)]
pub enum ShareTreeError {
    /// Snapshot file is not a valid index
    #[error("invalid index snapshot in {file}: {message}")]
    InvalidSnapshot { file: PathBuf, message: String },

    /// Config file is not valid TOML for our schema
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A node path given on the command line matched nothing
    #[error("no node matches '{path}' in the index tree")]
    NodeNotFound { path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// User quit the interactive browser
    #[error("selection aborted by user")]
    Aborted,
}
