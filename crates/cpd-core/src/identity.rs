//! # Identity Newtypes
//!
//! [`RegulatorId`] keys the standards registry. It is validated at
//! construction (and on deserialization) so that a malformed identifier
//! is rejected at the edge instead of surfacing later as an unknown
//! regulator.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of a professional regulator in the standards registry.
///
/// Normalised to lowercase. Allowed characters are ASCII letters, digits
/// and `-` (e.g. `gmc`, `nmc`, `ahpra-medical`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegulatorId(String);

impl RegulatorId {
    /// Create a validated regulator identifier.
    ///
    /// Leading/trailing whitespace is trimmed and ASCII letters are
    /// lowercased before validation.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = id.as_ref().trim().to_ascii_lowercase();
        let valid = !normalized.is_empty()
            && !normalized.starts_with('-')
            && !normalized.ends_with('-')
            && normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if valid {
            Ok(Self(normalized))
        } else {
            Err(ValidationError::InvalidRegulatorId(id.as_ref().to_string()))
        }
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegulatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RegulatorId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegulatorId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RegulatorId> for String {
    fn from(id: RegulatorId) -> Self {
        id.0
    }
}
