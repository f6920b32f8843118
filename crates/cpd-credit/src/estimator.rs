//! Hour estimation strategy.
//!
//! The engine credits a flat estimate per activity kind. Estimates are
//! looked up by the kind's string key so that a configuration layer can
//! override them without touching the generator.

use std::collections::BTreeMap;
use std::fmt;

use crate::activity::ActivityKind;

/// Default flat estimates, keyed by [`ActivityKind::as_str`].
pub const DEFAULT_HOUR_ESTIMATES: &[(&str, f64)] = &[
    ("reflection", 1.0),
    ("guided_session", 0.5),
    ("incident", 0.25),
];

/// Strategy for crediting hours to a derived activity.
pub trait HourEstimator: Send + Sync + fmt::Debug {
    /// Hours credited for one activity of `kind`.
    fn estimate(&self, kind: ActivityKind) -> f64;
}

/// Flat per-kind lookup table. Unknown keys estimate 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRateEstimator {
    table: BTreeMap<String, f64>,
}

impl FlatRateEstimator {
    /// Estimator over [`DEFAULT_HOUR_ESTIMATES`].
    pub fn new() -> Self {
        Self {
            table: DEFAULT_HOUR_ESTIMATES
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    /// Override (or add) the estimate for `key`.
    ///
    /// Negative or non-finite values are ignored with a warning.
    pub fn with_rate(mut self, key: impl Into<String>, hours: f64) -> Self {
        let key = key.into();
        if hours.is_finite() && hours >= 0.0 {
            self.table.insert(key, hours);
        } else {
            tracing::warn!(key = %key, hours, "ignoring invalid hour estimate");
        }
        self
    }

    /// Look up the estimate for `key`.
    pub fn rate(&self, key: &str) -> f64 {
        self.table.get(key).copied().unwrap_or(0.0)
    }
}

impl Default for FlatRateEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl HourEstimator for FlatRateEstimator {
    fn estimate(&self, kind: ActivityKind) -> f64 {
        self.rate(kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates() {
        let est = FlatRateEstimator::new();
        assert_eq!(est.estimate(ActivityKind::Reflection), 1.0);
        assert_eq!(est.estimate(ActivityKind::GuidedSession), 0.5);
        assert_eq!(est.estimate(ActivityKind::Incident), 0.25);
        assert_eq!(est.estimate(ActivityKind::ManualCredit), 0.0);
    }

    #[test]
    fn override_rate() {
        let est = FlatRateEstimator::new().with_rate("incident", 0.5);
        assert_eq!(est.estimate(ActivityKind::Incident), 0.5);
    }

    #[test]
    fn invalid_override_ignored() {
        let est = FlatRateEstimator::new()
            .with_rate("reflection", -2.0)
            .with_rate("guided_session", f64::INFINITY);
        assert_eq!(est.estimate(ActivityKind::Reflection), 1.0);
        assert_eq!(est.estimate(ActivityKind::GuidedSession), 0.5);
    }

    #[test]
    fn unknown_key_is_zero() {
        assert_eq!(FlatRateEstimator::new().rate("drawing"), 0.0);
    }
}
