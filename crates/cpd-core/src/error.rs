//! # Error Hierarchy
//!
//! Structured error types for the CPD engine, built with `thiserror`.
//! Each variant carries the offending input so that callers can surface
//! an actionable message without re-deriving context.

use thiserror::Error;

/// Top-level error type for `cpd-core`.
#[derive(Error, Debug)]
pub enum CpdError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when a domain primitive fails validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Regulator identifier is empty or contains unsupported characters.
    #[error("invalid regulator id {0:?}: expected lowercase letters, digits and '-'")]
    InvalidRegulatorId(String),

    /// Timestamp could not be parsed.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Credit category identifier not recognised.
    #[error("unknown credit category: {0:?}")]
    UnknownCategory(String),

    /// Evidence kind identifier not recognised.
    #[error("unknown evidence kind: {0:?}")]
    UnknownEvidenceKind(String),

    /// A required record field is missing or blank.
    #[error("credit record {id:?} is missing required field `{field}`")]
    MissingField {
        /// Record identifier (may itself be empty).
        id: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Hour values must be finite and non-negative.
    #[error("credit record {id:?} has invalid hours {hours}")]
    InvalidHours {
        /// Record identifier.
        id: String,
        /// The rejected value.
        hours: f64,
    },
}

/// Result alias for `cpd-core` operations.
pub type CpdResult<T> = Result<T, CpdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_timestamp_display_includes_input() {
        let err = ValidationError::InvalidTimestamp {
            input: "yesterday".to_string(),
            reason: "not RFC 3339".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("yesterday"));
        assert!(msg.contains("not RFC 3339"));
    }

    #[test]
    fn missing_field_display() {
        let err = ValidationError::MissingField {
            id: "manual-1".to_string(),
            field: "title",
        };
        assert_eq!(
            err.to_string(),
            "credit record \"manual-1\" is missing required field `title`"
        );
    }

    #[test]
    fn validation_converts_into_top_level() {
        let err: CpdError = ValidationError::UnknownCategory("surgery".into()).into();
        assert!(err.to_string().starts_with("validation error:"));
        assert!(err.to_string().contains("surgery"));
    }
}
