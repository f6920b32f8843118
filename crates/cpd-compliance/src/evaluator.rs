//! # Compliance Evaluator
//!
//! Aggregates credit records against a [`RegulatoryStandard`]:
//!
//! 1. Compute the cycle window for "now".
//! 2. Keep records dated within `[start, end]`.
//! 3. Sum hours per category, in encounter order.
//! 4. Percentage per category of the total; 0 when the total is 0.
//! 5. Sort the breakdown by hours, descending. The sort is stable.
//! 6. Emit a gap for each unmet requirement: total, reflection minimum,
//!    then declared category minimums in declaration order.
//!
//! Category minimums may overlap; each is checked independently against
//! its own category. Unverified records count the same as verified ones.

use serde::Serialize;

use cpd_core::{CreditCategory, CreditRecord, RegulatorId, Timestamp};
use cpd_standards::{RegulatoryStandard, StandardsRegistry};

use crate::cycle::{cycle_window, CycleWindow};
use crate::error::ComplianceResult;

/// Shortfalls at or below this are treated as met.
pub const HOURS_EPSILON: f64 = 1e-9;

/// Hours logged in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// The category.
    pub category: CreditCategory,
    /// Display label.
    pub label: String,
    /// Hours within the window.
    pub hours: f64,
    /// Share of the window's total hours, 0 to 100.
    pub percentage: f64,
}

/// Progress against one standard for one cycle window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// The standard evaluated against.
    pub standard: RegulatoryStandard,
    /// The window evaluated.
    pub window: CycleWindow,
    /// Sum of hours within the window.
    pub total_hours: f64,
    /// Number of records within the window.
    pub record_count: usize,
    /// Progress toward the total requirement, capped at 100.
    pub progress_percent: f64,
    /// Per-category hours, descending.
    pub category_breakdown: Vec<CategoryBreakdown>,
    /// `true` iff `gaps` is empty.
    pub meets_requirements: bool,
    /// Human-readable unmet requirements.
    pub gaps: Vec<String>,
}

impl Summary {
    /// Hours logged in `category`, 0 when absent.
    pub fn category_hours(&self, category: CreditCategory) -> f64 {
        self.category_breakdown
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.hours)
            .unwrap_or(0.0)
    }

    /// Hours logged as reflective practice.
    pub fn reflection_hours(&self) -> f64 {
        self.category_hours(CreditCategory::Reflection)
    }

    /// The standard's total-hours requirement.
    pub fn required_hours(&self) -> f64 {
        self.standard.total_hours()
    }
}

/// Evaluate `records` against the standard registered under `regulator`.
///
/// # Errors
///
/// [`StandardsError::UnknownRegulator`](cpd_standards::StandardsError::UnknownRegulator)
/// when `regulator` is not registered.
pub fn evaluate(
    records: &[CreditRecord],
    registry: &StandardsRegistry,
    regulator: &RegulatorId,
    now: Timestamp,
) -> ComplianceResult<Summary> {
    let standard = registry.get(regulator)?;
    Ok(evaluate_standard(records, standard, now))
}

/// Evaluate `records` against `standard`.
pub fn evaluate_standard(
    records: &[CreditRecord],
    standard: &RegulatoryStandard,
    now: Timestamp,
) -> Summary {
    let window = cycle_window(standard, now);
    let in_window = records_in_window(records, &window);

    let mut totals: Vec<(CreditCategory, f64)> = Vec::new();
    for record in &in_window {
        match totals.iter_mut().find(|(c, _)| *c == record.category) {
            Some((_, hours)) => *hours += record.hours,
            None => totals.push((record.category, record.hours)),
        }
    }
    let total_hours: f64 = totals.iter().map(|(_, h)| h).sum();

    let mut category_breakdown: Vec<CategoryBreakdown> = totals
        .into_iter()
        .map(|(category, hours)| CategoryBreakdown {
            category,
            label: category.label().to_string(),
            hours,
            percentage: if total_hours > 0.0 {
                hours / total_hours * 100.0
            } else {
                0.0
            },
        })
        .collect();
    category_breakdown.sort_by(|a, b| b.hours.total_cmp(&a.hours));

    let hours_in = |category: CreditCategory| {
        category_breakdown
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.hours)
            .unwrap_or(0.0)
    };

    let mut gaps = Vec::new();
    let required = standard.total_hours();
    if required - total_hours > HOURS_EPSILON {
        gaps.push(format!(
            "Need {:.1} more hours to meet the {} hour requirement",
            required - total_hours,
            required
        ));
    }
    if let Some(min_reflection) = standard.minimum_reflection_hours() {
        let logged = hours_in(CreditCategory::Reflection);
        if min_reflection - logged > HOURS_EPSILON {
            gaps.push(format!(
                "Need {:.1} more reflection hours (minimum {} hours)",
                min_reflection - logged,
                min_reflection
            ));
        }
    }
    for minimum in standard.category_minimums() {
        let logged = hours_in(minimum.category);
        if minimum.minimum_hours - logged > HOURS_EPSILON {
            gaps.push(format!(
                "Need {:.1} more hours in {} (minimum {} hours)",
                minimum.minimum_hours - logged,
                minimum.category.label(),
                minimum.minimum_hours
            ));
        }
    }

    let progress_percent = if required > 0.0 {
        (total_hours / required * 100.0).min(100.0)
    } else {
        100.0
    };

    tracing::debug!(
        regulator = %standard.id,
        window = %window,
        records = in_window.len(),
        total_hours,
        gaps = gaps.len(),
        "evaluated compliance"
    );

    Summary {
        standard: standard.clone(),
        window,
        total_hours,
        record_count: in_window.len(),
        progress_percent,
        category_breakdown,
        meets_requirements: gaps.is_empty(),
        gaps,
    }
}

/// Records dated within `window`, in input order.
pub fn records_in_window<'a>(records: &'a [CreditRecord], window: &CycleWindow) -> Vec<&'a CreditRecord> {
    records.iter().filter(|r| window.contains(r.date)).collect()
}
