//! # Regulatory Standard
//!
//! The immutable rule set one regulator publishes. Standards are defined
//! at build time (see [`crate::builtin`]) or loaded from YAML standards
//! packs; the engine never mutates them.

use serde::{Deserialize, Serialize};

use cpd_core::{CreditCategory, RegulatorId};

use crate::error::{StandardsError, StandardsResult};

/// A minimum number of hours required in one credit category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMinimum {
    /// The constrained category.
    pub category: CreditCategory,
    /// Hours required in that category within the cycle.
    pub minimum_hours: f64,
}

impl CategoryMinimum {
    /// Convenience constructor used by the built-in table.
    pub fn new(category: CreditCategory, minimum_hours: f64) -> Self {
        Self {
            category,
            minimum_hours,
        }
    }
}

/// Hour requirements for one audit cycle.
///
/// The name follows the regulators' own terminology; for multi-year
/// cycles the values apply to the whole cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualRequirement {
    /// Floor on total hours within the cycle.
    pub total_hours: f64,
    /// Optional floor on hours in the reflection category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_reflection_hours: Option<f64>,
    /// Ordered category floors. May overlap with the total and with each other.
    #[serde(default)]
    pub category_minimums: Vec<CategoryMinimum>,
}

/// One regulator's continuing-development requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryStandard {
    /// Registry key.
    pub id: RegulatorId,
    /// Display name.
    pub regulator_name: String,
    /// Hour requirements.
    pub annual_requirement: AnnualRequirement,
    /// Cycle length in years. 1 means calendar-year cycles.
    pub cycle_length_years: u32,
    /// Free-text evidence descriptors. Informational only.
    #[serde(default)]
    pub required_evidence_kinds: Vec<String>,
    /// Free-text guidance copied verbatim into audit reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RegulatoryStandard {
    /// Required total hours for the cycle.
    pub fn total_hours(&self) -> f64 {
        self.annual_requirement.total_hours
    }

    /// Required reflection hours, if the regulator sets a floor.
    pub fn minimum_reflection_hours(&self) -> Option<f64> {
        self.annual_requirement.minimum_reflection_hours
    }

    /// Declared category minimums, in declaration order.
    pub fn category_minimums(&self) -> &[CategoryMinimum] {
        &self.annual_requirement.category_minimums
    }

    /// The first declared minimum for `category`, if any.
    pub fn minimum_for(&self, category: CreditCategory) -> Option<f64> {
        self.category_minimums()
            .iter()
            .find(|m| m.category == category)
            .map(|m| m.minimum_hours)
    }

    /// Whether cycles reset every calendar year.
    pub fn is_annual(&self) -> bool {
        self.cycle_length_years == 1
    }

    /// Structural validation applied to every standard entering a registry.
    ///
    /// Does not compare category minimums against the total: overlapping
    /// requirements are legitimate.
    pub fn validate(&self) -> StandardsResult<()> {
        let fail = |reason: String| StandardsError::InvalidStandard {
            id: self.id.to_string(),
            reason,
        };

        if self.regulator_name.trim().is_empty() {
            return Err(fail("regulator_name must not be empty".into()));
        }
        if self.cycle_length_years < 1 {
            return Err(fail("cycle_length_years must be at least 1".into()));
        }
        check_hours(self.total_hours(), "total_hours").map_err(fail)?;
        if let Some(refl) = self.minimum_reflection_hours() {
            check_hours(refl, "minimum_reflection_hours").map_err(fail)?;
        }
        for min in self.category_minimums() {
            check_hours(min.minimum_hours, min.category.as_str()).map_err(fail)?;
        }
        Ok(())
    }
}

fn check_hours(value: f64, field: &str) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{field} must be a finite, non-negative number of hours (got {value})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> RegulatoryStandard {
        RegulatoryStandard {
            id: RegulatorId::new("test").unwrap(),
            regulator_name: "Test Council".to_string(),
            annual_requirement: AnnualRequirement {
                total_hours: 10.0,
                minimum_reflection_hours: Some(2.0),
                category_minimums: vec![
                    CategoryMinimum::new(CreditCategory::PeerReview, 8.0),
                    CategoryMinimum::new(CreditCategory::ResearchAudit, 8.0),
                ],
            },
            cycle_length_years: 1,
            required_evidence_kinds: vec![],
            notes: None,
        }
    }

    #[test]
    fn overlapping_minimums_are_valid() {
        // 8 + 8 > 10 total: accepted.
        assert!(standard().validate().is_ok());
    }

    #[test]
    fn zero_cycle_rejected() {
        let mut s = standard();
        s.cycle_length_years = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn negative_minimum_rejected() {
        let mut s = standard();
        s.annual_requirement.category_minimums[0].minimum_hours = -1.0;
        let err = s.validate().unwrap_err().to_string();
        assert!(err.contains("peer-review"));
    }

    #[test]
    fn blank_name_rejected() {
        let mut s = standard();
        s.regulator_name = " ".into();
        assert!(s.validate().is_err());
    }

    #[test]
    fn minimum_for_returns_first_declared() {
        let s = standard();
        assert_eq!(s.minimum_for(CreditCategory::PeerReview), Some(8.0));
        assert_eq!(s.minimum_for(CreditCategory::Reflection), None);
        assert!(s.is_annual());
    }
}
