//! Import error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::db::StoreError;
use crate::summary::ParseError;

/// Why a single summary file could not be imported
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Import errors
#[derive(Debug, Error)]
pub enum IngestError {
    /// Summary directory could not be scanned
    #[error("Cannot scan {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file failed under the abort policy
    #[error("Cannot import {path}: {source}")]
    File { path: PathBuf, source: FileError },

    /// Storing parsed records failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A parse task panicked or was cancelled
    #[error("Parse task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type for import operations
pub type IngestResult<T> = Result<T, IngestError>;
