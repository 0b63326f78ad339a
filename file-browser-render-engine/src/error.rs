//! Error taxonomy for scanning, entity construction, navigation and startup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn one directory entry into a renderable entity.
///
/// Never fatal: the scene builder downgrades the entity to an error card.
#[derive(Debug, Error)]
pub enum EntityError {
    #[error("no content type known for {path}")]
    ClassificationUnknown { path: PathBuf },

    #[error("unsupported content type {mime} for {path}")]
    UnsupportedType { path: PathBuf, mime: String },

    /// Reading or decoding the entry's content failed.
    #[error("failed to construct entity for {path}: {source}")]
    ConstructionFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Failure to scan a whole directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory {path} is unreadable: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("history is empty")]
    HistoryEmpty,

    #[error("a directory is already loading")]
    LoadInFlight,

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Startup failures. These end the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("grid step must be a positive number, got {0}")]
    InvalidGridStep(f32),

    #[error("text preview size must be between 1 and {max} bytes, got {got}")]
    InvalidTextPreviewBytes { got: usize, max: usize },
}
