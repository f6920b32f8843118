//! Report formatting errors.

use thiserror::Error;

/// Errors from [`format_audit_report`](crate::format_audit_report).
#[derive(Error, Debug)]
pub enum ReportError {
    /// Computing the record digest failed.
    #[error("failed to digest credit records: {0}")]
    Digest(#[from] cpd_core::CpdError),
}

/// Convenience alias.
pub type ReportResult<T> = Result<T, ReportError>;
