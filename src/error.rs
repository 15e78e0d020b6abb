//! Error types for dataset generation
//!
//! Every filesystem failure carries the path it happened on and the underlying
//! `std::io::Error`. A single failure aborts the whole run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while validating a configuration or generating files
#[derive(Debug, Error)]
pub enum GenError {
    /// Configuration rejected before any IO happened
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A destination or shard directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data file could not be opened for writing
    #[error("failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A chunk write failed part way through a file
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Flush or fsync failed after the data was written
    #[error("failed to sync {}: {source}", path.display())]
    Sync {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The JSON run report could not be written
    #[error("failed to write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    /// Shorthand for an `InvalidArgument` built from anything printable
    pub fn invalid(msg: impl Into<String>) -> Self {
        GenError::InvalidArgument(msg.into())
    }

    /// Path the error refers to, if it came from the filesystem
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            GenError::InvalidArgument(_) => None,
            GenError::DirectoryCreation { path, .. }
            | GenError::FileOpen { path, .. }
            | GenError::Write { path, .. }
            | GenError::Sync { path, .. }
            | GenError::Report { path, .. } => Some(path),
        }
    }
}
