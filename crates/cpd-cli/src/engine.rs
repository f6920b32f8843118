//! # Engine Wiring
//!
//! Resolves configuration, the standards registry, the credit generator
//! and the manual store from global flags, and assembles the record set
//! the subcommands evaluate.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_json::Value;

use cpd_core::{CreditRecord, RegulatorId, Timestamp};
use cpd_credit::{merge_records, CreditGenerator};
use cpd_standards::StandardsRegistry;
use cpd_store::{JsonFileStore, ManualCreditStore};

use crate::config::CliConfig;

/// Global options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Extra standards packs, merged after configured ones.
    pub standards: Vec<PathBuf>,
    /// Manual store override.
    pub store: Option<PathBuf>,
}

/// Everything a subcommand needs.
#[derive(Debug)]
pub struct Engine {
    pub config: CliConfig,
    pub registry: StandardsRegistry,
    pub generator: CreditGenerator,
    pub store_path: PathBuf,
}

impl Engine {
    /// Resolve configuration and build the registry.
    pub fn load(options: &GlobalOptions) -> Result<Self> {
        let config = CliConfig::resolve(options.config.as_deref())?;
        Self::from_config(config, options)
    }

    /// Build from an already-parsed configuration.
    pub fn from_config(config: CliConfig, options: &GlobalOptions) -> Result<Self> {
        let mut registry = StandardsRegistry::builtin();
        for pack in config.standards_packs.iter().chain(&options.standards) {
            let merged = registry
                .load_pack(pack)
                .with_context(|| format!("failed to load standards pack: {}", pack.display()))?;
            tracing::info!(path = %pack.display(), merged, "merged standards pack");
        }
        let generator = config.generator();
        let store_path = config.manual_store_path(options.store.as_deref());
        Ok(Self {
            config,
            registry,
            generator,
            store_path,
        })
    }

    /// The manual credit store.
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.store_path)
    }

    /// Regulator from `flag`, falling back to `default_regulator`.
    pub fn regulator(&self, flag: Option<&str>) -> Result<RegulatorId> {
        let raw = match flag.or(self.config.default_regulator.as_deref()) {
            Some(raw) => raw,
            None => bail!("no regulator selected: pass --regulator or set default_regulator in the config file"),
        };
        let id = RegulatorId::new(raw).with_context(|| format!("invalid regulator id: {raw}"))?;
        // Fail before any records are read.
        self.registry.get(&id)?;
        Ok(id)
    }

    /// Generated records from `activities` (if given) merged with the
    /// stored manual records.
    pub fn collect_records(&self, activities: Option<&Path>) -> Result<Vec<CreditRecord>> {
        let generated = match activities {
            Some(path) => {
                let values = read_activity_file(path)?;
                let generation = self.generator.generate_from_json(&values);
                for skipped in &generation.skipped {
                    tracing::warn!(
                        index = skipped.index,
                        source_id = skipped.source_id.as_deref().unwrap_or("-"),
                        reason = %skipped.reason,
                        "skipped activity"
                    );
                }
                tracing::info!(
                    generated = generation.records.len(),
                    skipped = generation.skipped.len(),
                    "generated credits"
                );
                retain_valid(generation.records, "activity file")
            }
            None => Vec::new(),
        };
        let manual = self
            .store()
            .load()
            .with_context(|| format!("failed to load manual credits: {}", self.store_path.display()))?;
        Ok(merge_records(generated, retain_valid(manual, "manual store")))
    }
}

/// Drop records failing [`CreditRecord::validate`], logging each one.
///
/// `manual_credit` activities and stored records are self-asserted, so
/// negative or non-finite hours can arrive from either source.
pub fn retain_valid(records: Vec<CreditRecord>, origin: &str) -> Vec<CreditRecord> {
    records
        .into_iter()
        .filter(|record| match record.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(origin, id = %record.id, error = %e, "dropped invalid credit record");
                false
            }
        })
        .collect()
}

/// Parse `--now`, defaulting to the current time.
pub fn resolve_now(flag: Option<&str>) -> Result<Timestamp> {
    match flag {
        Some(raw) => Timestamp::parse(raw).with_context(|| format!("invalid --now value: {raw}")),
        None => Ok(Timestamp::now()),
    }
}

/// Read a JSON activity file: either a bare array or `{"activities": [...]}`.
pub fn read_activity_file(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read activity file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse activity file: {}", path.display()))?;
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("activities") {
            Some(Value::Array(items)) => Ok(items),
            _ => bail!(
                "activity file {} must be a JSON array or an object with an \"activities\" array",
                path.display()
            ),
        },
        _ => bail!("activity file {} must be a JSON array", path.display()),
    }
}
