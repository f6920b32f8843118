//! # cpd-credit — Credit Generator
//!
//! Turns captured professional-development activity into normalized
//! [`CreditRecord`](cpd_core::CreditRecord)s:
//!
//! - **Activity** (`activity.rs`): [`RawActivity`]: the tagged input shapes
//!   handed over by capture collaborators (reflection, guided session,
//!   incident note, or an already well-formed manual credit).
//!
//! - **Estimator** (`estimator.rs`): [`HourEstimator`]: flat per-kind hour
//!   estimates. Duration is never inferred from content length or
//!   timestamps; [`FlatRateEstimator`] looks the estimate up by kind key.
//!
//! - **Generator** (`generator.rs`): [`CreditGenerator`]: pure, idempotent
//!   mapping from one activity to one record. Malformed activities are
//!   skipped and reported, never raised, so one bad entry cannot block the
//!   rest of the batch.
//!
//! ## Determinism
//!
//! A derived record's `id` is `"{prefix}-{source_id}"` and its `created_at`
//! is the activity's capture time (or its date). Regenerating from an
//! unchanged activity list therefore yields byte-identical records, and
//! [`merge_records`] can recombine them with earlier output without
//! duplicates.

pub mod activity;
pub mod estimator;
pub mod generator;

pub use activity::{ActivityKind, Answer, GuidedSessionActivity, IncidentNote, RawActivity, ReflectionActivity};
pub use estimator::{FlatRateEstimator, HourEstimator, DEFAULT_HOUR_ESTIMATES};
pub use generator::{
    merge_records, CreditGenerator, Generation, SkipReason, SkippedActivity,
    DEFAULT_DESCRIPTION_LIMIT, LEARNING_OUTCOME_KEYS, TRUNCATION_MARKER,
};
