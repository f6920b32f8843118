//! Error types for compliance evaluation.

use thiserror::Error;

use cpd_standards::StandardsError;

/// Errors from [`evaluate`](crate::evaluate).
#[derive(Error, Debug)]
pub enum ComplianceError {
    /// Regulator lookup failed. There is no default standard to fall back to.
    #[error(transparent)]
    Standards(#[from] StandardsError),
}

/// Convenience alias.
pub type ComplianceResult<T> = Result<T, ComplianceError>;
