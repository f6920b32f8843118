//! # cpd-core — Foundational Types for the CPD Compliance Engine
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One closed category enum.** [`CreditCategory`] is the single
//!    definition of the credit taxonomy. Every `match` on it is exhaustive,
//!    so adding a category forces every consumer to handle it.
//!
//! 2. **UTC-only timestamps.** [`Timestamp`] normalises every input to UTC
//!    with seconds precision. Activity dates, creation times and cycle
//!    boundaries all compare on the same footing.
//!
//! 3. **Newtype regulator identifiers.** [`RegulatorId`] is validated at
//!    construction. No bare strings for registry keys.
//!
//! 4. **Records are immutable values.** A [`CreditRecord`] is created once
//!    and never mutated; corrections are delete-and-recreate.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cpd-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod digest;
pub mod error;
pub mod evidence;
pub mod identity;
pub mod record;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use category::{CreditCategory, CREDIT_CATEGORY_COUNT};
pub use digest::{digest_json, sha256_digest, ContentDigest};
pub use error::{CpdError, CpdResult, ValidationError};
pub use evidence::EvidenceKind;
pub use identity::RegulatorId;
pub use record::CreditRecord;
pub use temporal::Timestamp;
