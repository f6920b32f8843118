//! # cpd-compliance — Cycle Calculator and Compliance Evaluator
//!
//! Given credit records, a regulatory standard and an explicit "now",
//! computes the audit window in effect and a [`Summary`] of progress
//! against the standard.
//!
//! - **Cycle** (`cycle.rs`): [`cycle_window`]: calendar-year windows for
//!   annual standards, fixed blocks anchored at multiples of the cycle
//!   length otherwise.
//!
//! - **Evaluator** (`evaluator.rs`): [`evaluate`] / [`evaluate_standard`]:
//!   window filtering, per-category aggregation, stable descending
//!   breakdown and gap detection.
//!
//! The regulator is always passed explicitly and the clock is always
//! injected; nothing here reads ambient state.

pub mod cycle;
pub mod error;
pub mod evaluator;

pub use cycle::{cycle_window, cycle_window_for_length, CycleWindow};
pub use error::{ComplianceError, ComplianceResult};
pub use evaluator::{
    evaluate, evaluate_standard, records_in_window, CategoryBreakdown, Summary, HOURS_EPSILON,
};
