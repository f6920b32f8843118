//! # cpd-report — Audit Report Formatter
//!
//! Renders a [`Summary`](cpd_compliance::Summary) and the credit records
//! behind it as a single comma-separated document for submission to a
//! regulator or appraiser.
//!
//! Section and column order are the compatibility contract: humans read
//! the report, nothing parses it back. The formatter performs no I/O.

pub mod audit;
pub mod csv;
pub mod error;

pub use audit::{format_audit_report, report_file_name, DECLARATION, OUTCOME_SEPARATOR};
pub use csv::escape_field;
pub use error::{ReportError, ReportResult};
