//! # CLI Configuration
//!
//! Optional YAML file. Every key may be omitted:
//!
//! ```yaml
//! default_regulator: gmc
//! manual_store: ~/.local/share/cpd/cpd_manual_credits.json
//! standards_packs:
//!   - packs/local-board.yaml
//! description_limit: 200
//! hour_estimates:
//!   incident: 0.5
//! ```
//!
//! Precedence is flag, then config file, then built-in default.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use cpd_credit::{CreditGenerator, FlatRateEstimator};

/// Config file looked for in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "cpd.yaml";

/// Manual store file used when neither flag nor config names one.
pub const DEFAULT_MANUAL_STORE: &str = "cpd_manual_credits.json";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Regulator used when `--regulator` is not given.
    pub default_regulator: Option<String>,
    /// Path of the manual credit store file.
    pub manual_store: Option<PathBuf>,
    /// Extra standards packs merged into the registry, in order.
    pub standards_packs: Vec<PathBuf>,
    /// Derived description limit, in characters.
    pub description_limit: Option<usize>,
    /// Per-kind hour estimate overrides.
    pub hour_estimates: BTreeMap<String, f64>,
}

impl CliConfig {
    /// Parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), otherwise
    /// [`DEFAULT_CONFIG_FILE`] if present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Manual store path: `flag`, then config, then the default.
    pub fn manual_store_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.manual_store.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANUAL_STORE))
    }

    /// A generator honouring the configured limit and estimates.
    pub fn generator(&self) -> CreditGenerator {
        let estimator = self
            .hour_estimates
            .iter()
            .fold(FlatRateEstimator::new(), |est, (key, hours)| est.with_rate(key.clone(), *hours));
        let generator = CreditGenerator::with_estimator(Box::new(estimator));
        match self.description_limit {
            Some(limit) => generator.with_description_limit(limit),
            None => generator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "default_regulator: nmc\nmanual_store: /tmp/store.json\nstandards_packs: [a.yaml, b.yaml]\ndescription_limit: 80\nhour_estimates:\n  incident: 0.5"
        )
        .unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.default_regulator.as_deref(), Some("nmc"));
        assert_eq!(config.standards_packs.len(), 2);
        assert_eq!(config.generator().description_limit(), 80);
        assert_eq!(config.hour_estimates["incident"], 0.5);
    }

    #[test]
    fn empty_config_is_default() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{}").unwrap();
        assert_eq!(CliConfig::load(file.path()).unwrap(), CliConfig::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "regulator: gmc\n").unwrap();
        assert!(CliConfig::load(file.path()).is_err());
    }

    #[test]
    fn explicit_missing_config_is_error() {
        assert!(CliConfig::resolve(Some(Path::new("/nonexistent/cpd.yaml"))).is_err());
    }

    #[test]
    fn store_path_precedence() {
        let config = CliConfig {
            manual_store: Some(PathBuf::from("from-config.json")),
            ..CliConfig::default()
        };
        assert_eq!(
            config.manual_store_path(Some(Path::new("flag.json"))),
            PathBuf::from("flag.json")
        );
        assert_eq!(config.manual_store_path(None), PathBuf::from("from-config.json"));
        assert_eq!(
            CliConfig::default().manual_store_path(None),
            PathBuf::from(DEFAULT_MANUAL_STORE)
        );
    }
}
