//! Manual credit entry.
//!
//! Manual records are self-asserted: they are created with
//! `verified = false` and a random id under [`MANUAL_ID_PREFIX`].
//! Records are never edited; a correction is a removal plus a new record.

use cpd_core::{CreditCategory, CreditRecord, EvidenceKind, Timestamp};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::ManualCreditStore;

/// Id prefix of manually entered records.
pub const MANUAL_ID_PREFIX: &str = "manual-";

/// Practitioner-supplied fields of a manual credit.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualCreditInput {
    pub date: Timestamp,
    pub title: String,
    pub description: String,
    pub category: CreditCategory,
    pub hours: f64,
    pub evidence_kind: EvidenceKind,
    pub learning_outcomes: Option<Vec<String>>,
}

/// Build an unverified record from `input`, stamped with `now`.
pub fn new_manual_record(input: ManualCreditInput, now: Timestamp) -> CreditRecord {
    CreditRecord {
        id: format!("{MANUAL_ID_PREFIX}{}", Uuid::new_v4()),
        date: input.date,
        title: input.title,
        description: input.description,
        category: input.category,
        hours: input.hours,
        evidence_kind: input.evidence_kind,
        learning_outcomes: input.learning_outcomes.filter(|o| !o.is_empty()),
        linked_source_id: None,
        verified: false,
        created_at: now,
    }
}

/// Validate `record` and append it to the stored collection.
pub fn add_record<S: ManualCreditStore + ?Sized>(store: &mut S, record: CreditRecord) -> StoreResult<()> {
    record.validate()?;
    let mut records = store.load()?;
    if records.iter().any(|r| r.id == record.id) {
        return Err(StoreError::DuplicateId(record.id));
    }
    tracing::info!(id = %record.id, hours = record.hours, category = %record.category, "adding manual credit");
    records.push(record);
    store.save(&records)
}

/// Remove the record with `id` from the stored collection.
pub fn remove_record<S: ManualCreditStore + ?Sized>(store: &mut S, id: &str) -> StoreResult<CreditRecord> {
    let mut records = store.load()?;
    let index = records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    let removed = records.remove(index);
    store.save(&records)?;
    tracing::info!(id, "removed manual credit");
    Ok(removed)
}
