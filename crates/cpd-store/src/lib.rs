//! # cpd-store — Manual Credit Persistence
//!
//! Manually entered credit records live under one named entry,
//! [`MANUAL_CREDITS_KEY`], holding the whole collection as a JSON array.
//! Persistence is overwrite-whole-collection: callers load, mutate, then
//! save. A single active writer is assumed; there is no locking.
//!
//! - [`ManualCreditStore`]: the load/save seam.
//! - [`JsonFileStore`]: a JSON object file on disk, replaced atomically.
//! - [`MemoryStore`]: in-process, for tests and embedding.
//! - [`add_record`] / [`remove_record`]: read-modify-write helpers.
//! - [`new_manual_record`]: builds an unverified record with a fresh id.

pub mod error;
pub mod file;
pub mod manual;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use manual::{add_record, new_manual_record, remove_record, ManualCreditInput, MANUAL_ID_PREFIX};
pub use memory::MemoryStore;

use cpd_core::CreditRecord;

/// Name of the entry holding manual credits.
pub const MANUAL_CREDITS_KEY: &str = "cpd_manual_credits";

/// Load/save seam for the manual credit collection.
pub trait ManualCreditStore {
    /// The full collection; empty when nothing has been saved.
    fn load(&self) -> StoreResult<Vec<CreditRecord>>;

    /// Replace the full collection.
    fn save(&mut self, records: &[CreditRecord]) -> StoreResult<()>;
}
