//! # Credit Record — the Unit of Work
//!
//! A [`CreditRecord`] represents one completed professional-development
//! activity. Records come from two places:
//!
//! - **Mechanically derived** by the credit generator from captured
//!   activity (`verified = true`). Their `id` is a deterministic function
//!   of the source activity, so regeneration never duplicates them.
//! - **Manually entered** by the practitioner (`verified = false`). These
//!   are self-asserted; the engine carries the flag through and counts
//!   them identically to verified records.
//!
//! Records are never mutated in place. A correction is a removal followed
//! by a fresh record.
//!
//! ## Wire Format
//!
//! camelCase JSON, matching the persisted manual-record collection:
//!
//! ```json
//! {
//!   "id": "manual-6f1c…",
//!   "date": "2024-04-01T00:00:00Z",
//!   "title": "Resuscitation update",
//!   "description": "Half-day ALS refresher",
//!   "category": "learning-development",
//!   "hours": 2.0,
//!   "evidenceKind": "course",
//!   "verified": false,
//!   "createdAt": "2024-04-02T10:00:00Z"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::category::CreditCategory;
use crate::error::ValidationError;
use crate::evidence::EvidenceKind;
use crate::temporal::Timestamp;

/// A normalized professional-development credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRecord {
    /// Unique identifier; deterministic for derived records.
    pub id: String,
    /// When the underlying activity occurred.
    pub date: Timestamp,
    /// Short title.
    pub title: String,
    /// Free-text description (bounded length for derived records).
    #[serde(default)]
    pub description: String,
    /// Credit category.
    pub category: CreditCategory,
    /// Credited hours; finite and non-negative.
    pub hours: f64,
    /// Kind of supporting evidence.
    pub evidence_kind: EvidenceKind,
    /// Learning outcomes, in order, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_outcomes: Option<Vec<String>>,
    /// Back-reference to the originating raw activity. Traceability only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_source_id: Option<String>,
    /// `true` for mechanically derived records.
    #[serde(default)]
    pub verified: bool,
    /// When the record was created (distinct from `date`).
    pub created_at: Timestamp,
}

impl CreditRecord {
    /// Check required-field presence and hour sanity.
    ///
    /// The generator never calls this; it is the check a caller applies to
    /// manual input before handing it to the engine or the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField {
                id: self.id.clone(),
                field: "id",
            });
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField {
                id: self.id.clone(),
                field: "title",
            });
        }
        if !self.hours.is_finite() || self.hours < 0.0 {
            return Err(ValidationError::InvalidHours {
                id: self.id.clone(),
                hours: self.hours,
            });
        }
        Ok(())
    }

    /// Learning outcomes joined with `sep`, or an empty string.
    pub fn outcomes_joined(&self, sep: &str) -> String {
        self.learning_outcomes
            .as_ref()
            .map(|outcomes| outcomes.join(sep))
            .unwrap_or_default()
    }
}
