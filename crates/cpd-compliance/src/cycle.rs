//! # Cycle Calculator
//!
//! Computes the [`CycleWindow`] containing "now" for a standard.
//!
//! - `cycle_length_years == 1`: January 1 00:00:00 through December 31
//!   23:59:59 of the current UTC year.
//! - `cycle_length_years > 1`: fixed, non-overlapping blocks starting at
//!   `floor(year / len) * len`. A 5-year cycle evaluated in 2027 covers
//!   2025 through 2029.
//!
//! Multi-year anchoring uses absolute year boundaries, not a
//! practitioner's enrolment or revalidation date. Regulator-specific
//! anchoring is not modelled.

use serde::{Deserialize, Serialize};

use cpd_core::Timestamp;
use cpd_standards::RegulatoryStandard;

/// Inclusive audit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleWindow {
    /// First instant of the window.
    pub start: Timestamp,
    /// Last instant of the window (23:59:59 on December 31).
    pub end: Timestamp,
}

impl CycleWindow {
    /// Whether `ts` falls within `[start, end]`.
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Whole days from `now` until the end of the window; 0 once past it.
    pub fn days_remaining(&self, now: Timestamp) -> i64 {
        (*self.end.as_datetime() - *now.as_datetime())
            .num_days()
            .max(0)
    }

    /// Calendar year the window starts in.
    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    /// Calendar year the window ends in.
    pub fn end_year(&self) -> i32 {
        self.end.year()
    }
}

impl std::fmt::Display for CycleWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start.date_string(), self.end.date_string())
    }
}

/// The window of `standard`'s cycle that contains `now`.
pub fn cycle_window(standard: &RegulatoryStandard, now: Timestamp) -> CycleWindow {
    cycle_window_for_length(standard.cycle_length_years, now)
}

/// The window of a `cycle_length_years`-long cycle containing `now`.
///
/// A length of 0 is treated as 1.
pub fn cycle_window_for_length(cycle_length_years: u32, now: Timestamp) -> CycleWindow {
    let len = i32::try_from(cycle_length_years.max(1)).unwrap_or(i32::MAX);
    let start_year = now.year().div_euclid(len) * len;
    let end_year = start_year.saturating_add(len - 1);

    // Both fall back to `now` only outside chrono's representable range.
    CycleWindow {
        start: Timestamp::from_ymd_hms(start_year, 1, 1, 0, 0, 0).unwrap_or(now),
        end: Timestamp::from_ymd_hms(end_year, 12, 31, 23, 59, 59).unwrap_or(now),
    }
}
