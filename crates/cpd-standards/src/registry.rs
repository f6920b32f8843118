//! # Standards Registry
//!
//! Ordered collection of [`RegulatoryStandard`]s keyed by
//! [`RegulatorId`]. Starts from the built-in table and can be extended or
//! overridden by YAML standards packs:
//!
//! ```yaml
//! standards:
//!   - id: acme
//!     regulator_name: ACME Professional Board
//!     cycle_length_years: 2
//!     annual_requirement:
//!       total_hours: 40
//!       minimum_reflection_hours: 6
//!       category_minimums:
//!         - category: peer-review
//!           minimum_hours: 4
//!     required_evidence_kinds:
//!       - Reflective log
//! ```
//!
//! Lookups fail fast with [`StandardsError::UnknownRegulator`]; there is no
//! fallback standard.

use std::path::Path;

use serde::{Deserialize, Serialize};

use cpd_core::RegulatorId;

use crate::builtin::builtin_standards;
use crate::error::{StandardsError, StandardsResult};
use crate::standard::RegulatoryStandard;

/// On-disk shape of a standards pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsPack {
    /// Standards defined by the pack, in order.
    pub standards: Vec<RegulatoryStandard>,
}

/// Registry of regulatory standards.
#[derive(Debug, Clone, Default)]
pub struct StandardsRegistry {
    standards: Vec<RegulatoryStandard>,
}

impl StandardsRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in regulator table.
    pub fn builtin() -> Self {
        Self {
            standards: builtin_standards(),
        }
    }

    /// Look up a standard by identifier.
    ///
    /// # Errors
    ///
    /// [`StandardsError::UnknownRegulator`] when no standard is registered
    /// under `id`.
    pub fn get(&self, id: &RegulatorId) -> StandardsResult<&RegulatoryStandard> {
        self.standards
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| StandardsError::UnknownRegulator {
                id: id.to_string(),
                known: self.known_ids(),
            })
    }

    /// Parse `id` and look it up.
    pub fn get_str(&self, id: &str) -> StandardsResult<&RegulatoryStandard> {
        let parsed = RegulatorId::new(id).map_err(|_| StandardsError::UnknownRegulator {
            id: id.to_string(),
            known: self.known_ids(),
        })?;
        self.get(&parsed)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &RegulatorId) -> bool {
        self.standards.iter().any(|s| &s.id == id)
    }

    /// Registered identifiers, in registry order.
    pub fn ids(&self) -> Vec<&RegulatorId> {
        self.standards.iter().map(|s| &s.id).collect()
    }

    /// Iterate standards in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &RegulatoryStandard> {
        self.standards.iter()
    }

    /// Number of registered standards.
    pub fn len(&self) -> usize {
        self.standards.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }

    /// Validate and insert `standard`.
    ///
    /// A standard with an already-registered id replaces the existing one
    /// in place (keeping its position) and the replaced standard is
    /// returned.
    pub fn insert(&mut self, standard: RegulatoryStandard) -> StandardsResult<Option<RegulatoryStandard>> {
        standard.validate()?;
        match self.standards.iter_mut().find(|s| s.id == standard.id) {
            Some(existing) => {
                tracing::info!(regulator = %standard.id, "standards pack overrides registered standard");
                Ok(Some(std::mem::replace(existing, standard)))
            }
            None => {
                self.standards.push(standard);
                Ok(None)
            }
        }
    }

    /// Merge every standard from a parsed pack. Returns the number merged.
    ///
    /// The pack is validated as a whole before any entry is inserted, so a
    /// bad pack leaves the registry unchanged.
    pub fn merge_pack(&mut self, pack: StandardsPack) -> StandardsResult<usize> {
        for standard in &pack.standards {
            standard.validate()?;
        }
        let count = pack.standards.len();
        for standard in pack.standards {
            self.insert(standard)?;
        }
        Ok(count)
    }

    /// Parse a YAML standards pack from a string and merge it.
    pub fn merge_pack_str(&mut self, yaml: &str) -> StandardsResult<usize> {
        let pack: StandardsPack = serde_yaml::from_str(yaml)?;
        self.merge_pack(pack)
    }

    /// Load a YAML standards pack from disk and merge it.
    pub fn load_pack(&mut self, path: &Path) -> StandardsResult<usize> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StandardsError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                StandardsError::Io(e)
            }
        })?;
        let pack: StandardsPack =
            serde_yaml::from_str(&content).map_err(|e| StandardsError::YamlParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        let merged = self.merge_pack(pack)?;
        tracing::debug!(path = %path.display(), merged, "loaded standards pack");
        Ok(merged)
    }

    fn known_ids(&self) -> String {
        self.standards
            .iter()
            .map(|s| s.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
