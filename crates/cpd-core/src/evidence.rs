//! Evidence kinds attached to credit records.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// The kind of evidence backing a credit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    /// A written reflection or reflective account.
    Reflection,
    /// Certificate or record of a completed course.
    Course,
    /// Conference or meeting attendance.
    Conference,
    /// Reading log (journals, guidelines, books).
    Reading,
    /// Teaching materials or feedback.
    Teaching,
    /// Audit or quality-improvement output.
    Audit,
    /// Anything else.
    Other,
}

impl EvidenceKind {
    /// Returns all evidence kinds in canonical order.
    pub fn all() -> &'static [EvidenceKind] {
        &[
            Self::Reflection,
            Self::Course,
            Self::Conference,
            Self::Reading,
            Self::Teaching,
            Self::Audit,
            Self::Other,
        ]
    }

    /// Returns the snake_case wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reflection => "reflection",
            Self::Course => "course",
            Self::Conference => "conference",
            Self::Reading => "reading",
            Self::Teaching => "teaching",
            Self::Audit => "audit",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvidenceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| ValidationError::UnknownEvidenceKind(s.to_string()))
    }
}
