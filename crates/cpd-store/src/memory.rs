//! In-memory store.

use cpd_core::CreditRecord;

use crate::error::StoreResult;
use crate::ManualCreditStore;

/// Holds the collection in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<CreditRecord>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `records`.
    pub fn with_records(records: Vec<CreditRecord>) -> Self {
        Self { records }
    }
}

impl ManualCreditStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<CreditRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[CreditRecord]) -> StoreResult<()> {
        self.records = records.to_vec();
        Ok(())
    }
}
