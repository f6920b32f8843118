//! Standards-registry error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by registry lookups and standards-pack loading.
#[derive(Debug, Error)]
pub enum StandardsError {
    /// No standard is registered under the requested identifier.
    ///
    /// There is no sensible default regulator, so this is always surfaced
    /// to the user as a configuration error.
    #[error("unknown regulator {id:?} (known regulators: {known})")]
    UnknownRegulator {
        /// The requested identifier.
        id: String,
        /// Comma-separated list of registered identifiers.
        known: String,
    },

    /// A standard failed structural validation.
    #[error("invalid standard {id:?}: {reason}")]
    InvalidStandard {
        /// Identifier of the offending standard.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A required file was not found.
    #[error("standards pack not found: {path}")]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// YAML parsing failed.
    #[error("failed to parse standards pack at {path}: {source}")]
    YamlParse {
        /// The pack path.
        path: PathBuf,
        /// Parser diagnostic.
        source: serde_yaml::Error,
    },

    /// Domain primitive validation failure (e.g. malformed regulator id).
    #[error(transparent)]
    Validation(#[from] cpd_core::ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error not tied to a file.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for registry operations.
pub type StandardsResult<T> = Result<T, StandardsError>;
