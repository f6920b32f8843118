//! # cpd-standards — Regulatory Standards Registry
//!
//! Static description of what each professional regulator requires within
//! its audit cycle:
//!
//! - **Standard** (`standard.rs`): [`RegulatoryStandard`]: total hours,
//!   optional reflection floor, ordered category minimums, cycle length,
//!   free-text evidence requirements and notes.
//!
//! - **Built-in table** (`builtin.rs`): the regulator definitions compiled
//!   into the engine.
//!
//! - **Registry** (`registry.rs`): [`StandardsRegistry`]: lookup by
//!   [`RegulatorId`](cpd_core::RegulatorId), failing fast on unknown ids,
//!   plus merging of YAML standards packs.
//!
//! ## Overlapping Minimums
//!
//! Category minimums are not required to sum to at most the total. Some
//! regulators count the same hour towards several requirements, so the
//! registry never rejects a standard on that basis and the evaluator never
//! assumes category minimums are mutually exclusive.

pub mod builtin;
pub mod error;
pub mod registry;
pub mod standard;

pub use error::{StandardsError, StandardsResult};
pub use registry::{StandardsPack, StandardsRegistry};
pub use standard::{AnnualRequirement, CategoryMinimum, RegulatoryStandard};
