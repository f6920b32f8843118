//! # Credit Generator
//!
//! Maps raw activity to [`CreditRecord`]s. Per-activity processing is a
//! pure function of the activity and the generator's estimator: no clock
//! reads, no randomness, no I/O.
//!
//! | Kind | Id | Category | Evidence | Hours |
//! |------|----|----------|----------|-------|
//! | reflection | `reflection-{source}` | Reflective Practice | reflection | estimator |
//! | guided_session | `guided-{source}` | Reflective Practice | reflection | estimator |
//! | incident | `incident-{source}` | Reflective Practice | reflection | estimator |
//! | manual_credit | unchanged | unchanged | unchanged | unchanged |
//!
//! Derived records are `verified = true`. Manual credits pass through
//! untouched.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use cpd_core::{CreditCategory, CreditRecord, EvidenceKind, Timestamp};

use crate::activity::{
    ActivityKind, Answer, GuidedSessionActivity, IncidentNote, RawActivity, ReflectionActivity,
};
use crate::estimator::{FlatRateEstimator, HourEstimator};

/// Maximum description length, in characters, before truncation.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 200;

/// Appended to a truncated description.
pub const TRUNCATION_MARKER: &str = "...";

/// Answer keys whose text is lifted into `learning_outcomes`.
pub const LEARNING_OUTCOME_KEYS: &[&str] = &[
    "learning",
    "learning_outcomes",
    "what_learned",
    "key_learning",
    "action_plan",
    "next_steps",
];

/// Why an activity produced no record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No date on the activity.
    #[error("activity has no date")]
    MissingDate,

    /// Date present but unparseable.
    #[error("activity date {0:?} is not a recognised timestamp")]
    InvalidDate(String),

    /// `kind` discriminant not recognised.
    #[error("unknown activity kind {0:?}")]
    UnknownKind(String),

    /// Structurally invalid activity.
    #[error("malformed activity: {0}")]
    Malformed(String),
}

/// An activity that was skipped, with its position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedActivity {
    /// Zero-based index in the input list.
    pub index: usize,
    /// Source id, when one could be read.
    pub source_id: Option<String>,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Result of a batch generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    /// Records, in input order.
    pub records: Vec<CreditRecord>,
    /// Activities that produced no record.
    pub skipped: Vec<SkippedActivity>,
}

/// Converts raw activity into credit records.
#[derive(Debug)]
pub struct CreditGenerator {
    estimator: Box<dyn HourEstimator>,
    description_limit: usize,
}

impl Default for CreditGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CreditGenerator {
    /// Generator with the default flat-rate estimator.
    pub fn new() -> Self {
        Self::with_estimator(Box::new(FlatRateEstimator::new()))
    }

    /// Generator with a custom estimator.
    pub fn with_estimator(estimator: Box<dyn HourEstimator>) -> Self {
        Self {
            estimator,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }

    /// Override the description limit.
    pub fn with_description_limit(mut self, limit: usize) -> Self {
        self.description_limit = limit;
        self
    }

    /// The configured description limit.
    pub fn description_limit(&self) -> usize {
        self.description_limit
    }

    /// Generate one record.
    ///
    /// A [`RawActivity::ManualCredit`] is passed through unchanged and never
    /// skipped; the caller validates it with [`CreditRecord::validate`].
    ///
    /// # Errors
    ///
    /// A [`SkipReason`] when a derived activity has no usable date.
    pub fn generate(&self, activity: &RawActivity) -> Result<CreditRecord, SkipReason> {
        match activity {
            RawActivity::Reflection(a) => self.from_reflection(a),
            RawActivity::GuidedSession(a) => self.from_guided_session(a),
            RawActivity::Incident(a) => self.from_incident(a),
            RawActivity::ManualCredit(record) => Ok(record.clone()),
        }
    }

    /// Generate records for every activity, skipping malformed ones.
    pub fn generate_all(&self, activities: &[RawActivity]) -> Generation {
        let mut generation = Generation::default();
        for (index, activity) in activities.iter().enumerate() {
            match self.generate(activity) {
                Ok(record) => generation.records.push(record),
                Err(reason) => generation.skip(index, Some(activity.source_id().to_string()), reason),
            }
        }
        generation
    }

    /// Generate records from untyped JSON values.
    ///
    /// Values that do not decode to a [`RawActivity`] are skipped with a
    /// reason instead of failing the batch.
    pub fn generate_from_json(&self, values: &[Value]) -> Generation {
        let mut generation = Generation::default();
        for (index, value) in values.iter().enumerate() {
            let source_id = value
                .get("sourceId")
                .or_else(|| value.get("id"))
                .and_then(Value::as_str)
                .map(str::to_string);
            match decode_activity(value) {
                Ok(activity) => match self.generate(&activity) {
                    Ok(record) => generation.records.push(record),
                    Err(reason) => generation.skip(index, source_id, reason),
                },
                Err(reason) => generation.skip(index, source_id, reason),
            }
        }
        generation
    }

    fn from_reflection(&self, a: &ReflectionActivity) -> Result<CreditRecord, SkipReason> {
        let title = match non_blank(a.framework.as_deref()) {
            Some(framework) => format!("Reflection: {framework}"),
            None => "Reflective Practice Entry".to_string(),
        };
        let texts: Vec<&str> = a.answers.iter().map(|x| x.text.as_str()).collect();
        self.derive(
            ActivityKind::Reflection,
            &a.source_id,
            a.date.as_deref(),
            a.captured_at.as_deref(),
            title,
            &texts,
            outcomes_from_answers(&a.answers),
        )
    }

    fn from_guided_session(&self, a: &GuidedSessionActivity) -> Result<CreditRecord, SkipReason> {
        let title = match non_blank(a.space.as_deref()) {
            Some(space) => format!("Guided Reflection: {space}"),
            None => "Guided Reflection Session".to_string(),
        };
        let texts: Vec<&str> = a.answers.iter().map(|x| x.text.as_str()).collect();
        self.derive(
            ActivityKind::GuidedSession,
            &a.source_id,
            a.date.as_deref(),
            a.captured_at.as_deref(),
            title,
            &texts,
            outcomes_from_answers(&a.answers),
        )
    }

    fn from_incident(&self, a: &IncidentNote) -> Result<CreditRecord, SkipReason> {
        let title = match non_blank(a.title.as_deref()) {
            Some(t) => format!("Incident Reflection: {t}"),
            None => "Incident Reflection".to_string(),
        };
        let texts: Vec<&str> = [&a.summary, &a.actions, &a.learning]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .collect();
        let outcomes = non_blank(a.learning.as_deref()).map(|l| vec![l.to_string()]);
        self.derive(
            ActivityKind::Incident,
            &a.source_id,
            a.date.as_deref(),
            a.captured_at.as_deref(),
            title,
            &texts,
            outcomes,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn derive(
        &self,
        kind: ActivityKind,
        source_id: &str,
        date: Option<&str>,
        captured_at: Option<&str>,
        title: String,
        texts: &[&str],
        learning_outcomes: Option<Vec<String>>,
    ) -> Result<CreditRecord, SkipReason> {
        let raw_date = non_blank(date).ok_or(SkipReason::MissingDate)?;
        let date =
            Timestamp::parse(raw_date).map_err(|_| SkipReason::InvalidDate(raw_date.to_string()))?;
        let created_at = match non_blank(captured_at) {
            Some(raw) => Timestamp::parse(raw).unwrap_or_else(|_| {
                tracing::debug!(source_id, captured_at = raw, "unparseable capture time, using activity date");
                date
            }),
            None => date,
        };
        let joined = texts
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(CreditRecord {
            id: format!("{}-{}", kind.id_prefix(), source_id),
            date,
            title,
            description: truncate(&joined, self.description_limit),
            category: CreditCategory::Reflection,
            hours: self.estimator.estimate(kind),
            evidence_kind: EvidenceKind::Reflection,
            learning_outcomes,
            linked_source_id: Some(source_id.to_string()),
            verified: true,
            created_at,
        })
    }
}

impl Generation {
    fn skip(&mut self, index: usize, source_id: Option<String>, reason: SkipReason) {
        tracing::debug!(index, source_id = ?source_id, reason = %reason, "skipping activity");
        self.skipped.push(SkippedActivity {
            index,
            source_id,
            reason,
        });
    }
}

/// Merge generated and manual records, dropping later duplicates by id.
///
/// Generated records come first, so a manual record reusing a derived id
/// is ignored.
pub fn merge_records(generated: Vec<CreditRecord>, manual: Vec<CreditRecord>) -> Vec<CreditRecord> {
    let mut seen = HashSet::new();
    generated
        .into_iter()
        .chain(manual)
        .filter(|r| seen.insert(r.id.clone()))
        .collect()
}

fn decode_activity(value: &Value) -> Result<RawActivity, SkipReason> {
    let kind = value
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| SkipReason::Malformed("missing kind discriminant".to_string()))?;
    if ActivityKind::from_discriminant(kind).is_none() {
        return Err(SkipReason::UnknownKind(kind.to_string()));
    }
    match value.get("date") {
        None | Some(Value::Null) => return Err(SkipReason::MissingDate),
        Some(Value::String(s)) if s.trim().is_empty() => return Err(SkipReason::MissingDate),
        _ => {}
    }
    serde_json::from_value(value.clone()).map_err(|e| {
        let message = e.to_string();
        match value.get("date").and_then(Value::as_str) {
            Some(date) if Timestamp::parse(date).is_err() => SkipReason::InvalidDate(date.to_string()),
            _ => SkipReason::Malformed(message),
        }
    })
}

fn outcomes_from_answers(answers: &[Answer]) -> Option<Vec<String>> {
    let outcomes: Vec<String> = answers
        .iter()
        .filter(|a| LEARNING_OUTCOME_KEYS.contains(&a.key.as_str()))
        .filter_map(|a| non_blank(Some(a.text.as_str())).map(str::to_string))
        .collect();
    if outcomes.is_empty() {
        None
    } else {
        Some(outcomes)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Truncate `text` to `limit` characters, appending [`TRUNCATION_MARKER`].
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit).collect();
    cut.truncate(cut.trim_end().len());
    cut.push_str(TRUNCATION_MARKER);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answer(key: &str, text: &str) -> Answer {
        Answer {
            key: key.to_string(),
            text: text.to_string(),
        }
    }

    fn reflection(source: &str, date: Option<&str>) -> RawActivity {
        RawActivity::Reflection(ReflectionActivity {
            source_id: source.to_string(),
            date: date.map(str::to_string),
            captured_at: None,
            framework: Some("Gibbs Reflective Cycle".to_string()),
            answers: vec![
                answer("description", "Difficult handover on night shift."),
                answer("learning", "Use SBAR consistently."),
            ],
        })
    }

    fn guided(source: &str) -> RawActivity {
        RawActivity::GuidedSession(GuidedSessionActivity {
            source_id: source.to_string(),
            date: Some("2024-03-02".to_string()),
            captured_at: Some("2024-03-02T18:30:00Z".to_string()),
            space: Some("Difficult Conversations".to_string()),
            answers: vec![answer("prompt_1", "Talked through a complaint.")],
        })
    }

    fn incident(source: &str) -> RawActivity {
        RawActivity::Incident(IncidentNote {
            source_id: source.to_string(),
            date: Some("2024-03-03T14:00:00+01:00".to_string()),
            captured_at: None,
            title: Some("Medication error".to_string()),
            summary: Some("Wrong dose prepared.".to_string()),
            actions: None,
            learning: Some("Double-check high-risk drugs.".to_string()),
        })
    }

    #[test]
    fn reflection_maps_to_one_hour_reflective_practice() {
        let record = CreditGenerator::new()
            .generate(&reflection("r-1", Some("2024-03-01T09:00:00Z")))
            .unwrap();
        assert_eq!(record.id, "reflection-r-1");
        assert_eq!(record.title, "Reflection: Gibbs Reflective Cycle");
        assert_eq!(record.category, CreditCategory::Reflection);
        assert_eq!(record.evidence_kind, EvidenceKind::Reflection);
        assert_eq!(record.hours, 1.0);
        assert!(record.verified);
        assert_eq!(record.linked_source_id.as_deref(), Some("r-1"));
        assert_eq!(
            record.learning_outcomes,
            Some(vec!["Use SBAR consistently.".to_string()])
        );
        assert_eq!(
            record.description,
            "Difficult handover on night shift. Use SBAR consistently."
        );
        assert_eq!(record.created_at, record.date);
    }

    #[test]
    fn guided_session_is_half_hour() {
        let record = CreditGenerator::new().generate(&guided("g-1")).unwrap();
        assert_eq!(record.id, "guided-g-1");
        assert_eq!(record.hours, 0.5);
        assert_eq!(record.title, "Guided Reflection: Difficult Conversations");
        assert_eq!(record.created_at.to_iso8601(), "2024-03-02T18:30:00Z");
        assert!(record.learning_outcomes.is_none());
    }

    #[test]
    fn incident_note_is_quarter_hour_normalised_to_utc() {
        let record = CreditGenerator::new().generate(&incident("i-1")).unwrap();
        assert_eq!(record.id, "incident-i-1");
        assert_eq!(record.hours, 0.25);
        assert_eq!(record.date.to_iso8601(), "2024-03-03T13:00:00Z");
        assert_eq!(record.title, "Incident Reflection: Medication error");
        assert_eq!(
            record.description,
            "Wrong dose prepared. Double-check high-risk drugs."
        );
    }

    #[test]
    fn manual_credit_passes_through() {
        let manual = CreditRecord {
            id: "manual-abc".to_string(),
            date: Timestamp::parse("2024-04-01").unwrap(),
            title: "ALS".to_string(),
            description: String::new(),
            category: CreditCategory::LearningDevelopment,
            hours: 2.0,
            evidence_kind: EvidenceKind::Course,
            learning_outcomes: None,
            linked_source_id: None,
            verified: false,
            created_at: Timestamp::parse("2024-04-01").unwrap(),
        };
        let record = CreditGenerator::new()
            .generate(&RawActivity::ManualCredit(manual.clone()))
            .unwrap();
        assert_eq!(record, manual);

        // Not validated here; negative hours are the caller's to reject.
        let negative = CreditRecord { hours: -1.0, ..manual };
        let record = CreditGenerator::new()
            .generate(&RawActivity::ManualCredit(negative))
            .unwrap();
        assert_eq!(record.hours, -1.0);
        assert!(record.validate().is_err());
    }

    #[test]
    fn missing_date_is_skipped() {
        let gen = CreditGenerator::new();
        assert_eq!(
            gen.generate(&reflection("r-2", None)),
            Err(SkipReason::MissingDate)
        );
        assert_eq!(
            gen.generate(&reflection("r-2", Some("  "))),
            Err(SkipReason::MissingDate)
        );
    }

    #[test]
    fn invalid_date_is_skipped() {
        assert_eq!(
            CreditGenerator::new().generate(&reflection("r-3", Some("last tuesday"))),
            Err(SkipReason::InvalidDate("last tuesday".to_string()))
        );
    }

    #[test]
    fn generate_all_keeps_order_and_reports_skips() {
        let activities = vec![
            reflection("r-1", Some("2024-03-01")),
            reflection("r-2", None),
            guided("g-1"),
        ];
        let generation = CreditGenerator::new().generate_all(&activities);
        let ids: Vec<&str> = generation.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["reflection-r-1", "guided-g-1"]);
        assert_eq!(generation.skipped.len(), 1);
        assert_eq!(generation.skipped[0].index, 1);
        assert_eq!(generation.skipped[0].source_id.as_deref(), Some("r-2"));
    }

    #[test]
    fn regeneration_is_identical() {
        let activities = vec![
            reflection("r-1", Some("2024-03-01")),
            guided("g-1"),
            incident("i-1"),
        ];
        let gen = CreditGenerator::new();
        assert_eq!(gen.generate_all(&activities), gen.generate_all(&activities));
    }

    #[test]
    fn long_description_truncated() {
        let long = "x".repeat(500);
        let activity = RawActivity::Reflection(ReflectionActivity {
            source_id: "r-long".to_string(),
            date: Some("2024-01-01".to_string()),
            captured_at: None,
            framework: None,
            answers: vec![answer("description", &long)],
        });
        let record = CreditGenerator::new().generate(&activity).unwrap();
        assert_eq!(record.title, "Reflective Practice Entry");
        assert_eq!(
            record.description.chars().count(),
            DEFAULT_DESCRIPTION_LIMIT + TRUNCATION_MARKER.len()
        );
        assert!(record.description.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(10);
        assert_eq!(truncate(&text, 4), "éééé...");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ab   cd", 4), "ab...");
    }

    #[test]
    fn custom_limit_and_estimator() {
        let gen = CreditGenerator::with_estimator(Box::new(
            FlatRateEstimator::new().with_rate("reflection", 2.0),
        ))
        .with_description_limit(10);
        let record = gen.generate(&reflection("r-1", Some("2024-03-01"))).unwrap();
        assert_eq!(record.hours, 2.0);
        assert_eq!(record.description, "Difficult...");
        assert_eq!(gen.description_limit(), 10);
    }

    #[test]
    fn from_json_skips_unknown_and_malformed() {
        let values = vec![
            json!({"kind": "reflection", "sourceId": "r-1", "date": "2024-03-01"}),
            json!({"kind": "drawing", "sourceId": "d-1", "date": "2024-03-01"}),
            json!({"sourceId": "x-1", "date": "2024-03-01"}),
            json!({"kind": "incident", "sourceId": "i-1"}),
            json!({"kind": "guided_session", "date": "2024-03-01"}),
            json!({"kind": "incident", "sourceId": "i-2", "date": "not a date"}),
        ];
        let generation = CreditGenerator::new().generate_from_json(&values);
        assert_eq!(generation.records.len(), 1);
        assert_eq!(generation.records[0].id, "reflection-r-1");

        let reasons: Vec<&SkipReason> = generation.skipped.iter().map(|s| &s.reason).collect();
        assert_eq!(reasons[0], &SkipReason::UnknownKind("drawing".to_string()));
        assert!(matches!(reasons[1], SkipReason::Malformed(_)));
        assert_eq!(reasons[2], &SkipReason::MissingDate);
        assert!(matches!(reasons[3], SkipReason::Malformed(_)));
        assert_eq!(reasons[4], &SkipReason::InvalidDate("not a date".to_string()));
        assert_eq!(generation.skipped[3].source_id, None);
    }

    #[test]
    fn merge_drops_duplicate_ids() {
        let gen = CreditGenerator::new();
        let first = gen.generate_all(&[reflection("r-1", Some("2024-03-01"))]).records;
        let again = gen.generate_all(&[reflection("r-1", Some("2024-03-01"))]).records;
        let merged = merge_records(first.clone(), again);
        assert_eq!(merged, first);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn generation_is_deterministic(
                source in "[a-z0-9]{1,12}",
                text in ".{0,400}",
                day in 1u32..=28,
            ) {
                let activity = RawActivity::Reflection(ReflectionActivity {
                    source_id: source.clone(),
                    date: Some(format!("2024-02-{day:02}")),
                    captured_at: None,
                    framework: None,
                    answers: vec![Answer { key: "description".to_string(), text }],
                });
                let gen = CreditGenerator::new();
                let a = gen.generate(&activity).unwrap();
                let b = gen.generate(&activity).unwrap();
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(a.id, format!("reflection-{source}"));
                prop_assert!(
                    a.description.chars().count()
                        <= DEFAULT_DESCRIPTION_LIMIT + TRUNCATION_MARKER.len()
                );
            }
        }
    }
}
