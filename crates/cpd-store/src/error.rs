//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

use cpd_core::ValidationError;

/// Errors from manual credit persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a valid collection.
    #[error("manual credit store {} is corrupt: {source}", .path.display())]
    Corrupt {
        /// The file involved.
        path: PathBuf,
        /// Parser diagnostic.
        source: serde_json::Error,
    },

    /// Serializing the collection failed.
    #[error("failed to serialize manual credits: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No record with the given id.
    #[error("no manual credit with id {0:?}")]
    NotFound(String),

    /// A record with the given id already exists.
    #[error("manual credit {0:?} already exists")]
    DuplicateId(String),

    /// The record failed required-field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience alias.
pub type StoreResult<T> = Result<T, StoreError>;
