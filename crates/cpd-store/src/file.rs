//! # JSON File Store
//!
//! The backing file is a JSON object. The manual collection lives under
//! [`MANUAL_CREDITS_KEY`]; any other top-level keys are preserved on save.
//!
//! ```json
//! { "cpd_manual_credits": [ { "id": "manual-…", "date": "…", … } ] }
//! ```
//!
//! Saves write a sibling `.tmp` file and rename it over the target, so a
//! crash mid-write leaves the previous collection intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use cpd_core::CreditRecord;

use crate::error::{StoreError, StoreResult};
use crate::{ManualCreditStore, MANUAL_CREDITS_KEY};

/// Manual credits persisted in a JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, source: serde_json::Error) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            source,
        }
    }

    /// The whole top-level object, empty when the file is missing.
    fn read_object(&self) -> StoreResult<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content).map_err(|e| self.corrupt(e))
    }
}

impl ManualCreditStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<CreditRecord>> {
        let mut object = self.read_object()?;
        let records = match object.remove(MANUAL_CREDITS_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value).map_err(|e| self.corrupt(e))?,
        };
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded manual credits");
        Ok(records)
    }

    fn save(&mut self, records: &[CreditRecord]) -> StoreResult<()> {
        let mut object = self.read_object()?;
        object.insert(MANUAL_CREDITS_KEY.to_string(), serde_json::to_value(records)?);
        let mut body = serde_json::to_string_pretty(&Value::Object(object))?;
        body.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let staged = self.path.with_extension("tmp");
        fs::write(&staged, body).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&staged, &self.path) {
            let _ = fs::remove_file(&staged);
            return Err(self.io_error(e));
        }
        tracing::debug!(path = %self.path.display(), count = records.len(), "saved manual credits");
        Ok(())
    }
}
