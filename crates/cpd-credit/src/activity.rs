//! # Raw Activity Records
//!
//! The shapes capture collaborators hand to the generator. Every record is
//! tagged with a `kind` discriminant and carries a source id and a date;
//! the remaining fields are the free text specific to its kind.
//!
//! ```json
//! { "kind": "reflection", "sourceId": "r-17", "date": "2024-03-01T09:00:00Z",
//!   "framework": "Gibbs Reflective Cycle",
//!   "answers": [ { "key": "description", "text": "…" },
//!                { "key": "learning", "text": "…" } ] }
//! ```
//!
//! `date` is optional at the type level so that a record without one can
//! be reported as skipped instead of failing the whole batch.

use serde::{Deserialize, Serialize};

use cpd_core::CreditRecord;

/// Discriminant of a raw activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Framework-guided written reflection.
    Reflection,
    /// Guided session answering a sequence of prompts.
    GuidedSession,
    /// Note written after a clinical incident or significant event.
    Incident,
    /// Credit record entered by hand.
    ManualCredit,
}

impl ActivityKind {
    /// Returns all kinds in canonical order.
    pub fn all() -> &'static [ActivityKind] {
        &[
            Self::Reflection,
            Self::GuidedSession,
            Self::Incident,
            Self::ManualCredit,
        ]
    }

    /// The `kind` discriminant and hour-estimate table key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reflection => "reflection",
            Self::GuidedSession => "guided_session",
            Self::Incident => "incident",
            Self::ManualCredit => "manual_credit",
        }
    }

    /// Prefix of derived record ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Reflection => "reflection",
            Self::GuidedSession => "guided",
            Self::Incident => "incident",
            Self::ManualCredit => "manual",
        }
    }

    /// Parse a discriminant; `None` for unrecognised values.
    pub fn from_discriminant(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answered prompt or framework step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Prompt or step key (e.g. `description`, `feelings`, `learning`).
    pub key: String,
    /// The practitioner's answer.
    #[serde(default)]
    pub text: String,
}

/// A written reflection following a named framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionActivity {
    /// Id of the captured reflection.
    pub source_id: String,
    /// When the reflected-upon activity happened.
    #[serde(default)]
    pub date: Option<String>,
    /// When the reflection was captured.
    #[serde(default)]
    pub captured_at: Option<String>,
    /// Reflection framework name (e.g. "Gibbs Reflective Cycle").
    #[serde(default)]
    pub framework: Option<String>,
    /// Answers to the framework steps, in order.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// A guided session in a named space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidedSessionActivity {
    /// Id of the captured session.
    pub source_id: String,
    /// When the session took place.
    #[serde(default)]
    pub date: Option<String>,
    /// When the session was captured.
    #[serde(default)]
    pub captured_at: Option<String>,
    /// Name of the guided space (e.g. "Difficult Conversations").
    #[serde(default)]
    pub space: Option<String>,
    /// Prompt answers, in order.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// A note written after an incident or significant event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentNote {
    /// Id of the captured note.
    pub source_id: String,
    /// When the incident happened.
    #[serde(default)]
    pub date: Option<String>,
    /// When the note was captured.
    #[serde(default)]
    pub captured_at: Option<String>,
    /// Short incident title.
    #[serde(default)]
    pub title: Option<String>,
    /// What happened.
    #[serde(default)]
    pub summary: Option<String>,
    /// Actions taken afterwards.
    #[serde(default)]
    pub actions: Option<String>,
    /// What was learned.
    #[serde(default)]
    pub learning: Option<String>,
}

/// A raw activity record, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawActivity {
    /// Framework-guided reflection.
    Reflection(ReflectionActivity),
    /// Guided session.
    GuidedSession(GuidedSessionActivity),
    /// Incident note.
    Incident(IncidentNote),
    /// Already well-formed manual credit record.
    ManualCredit(CreditRecord),
}

impl RawActivity {
    /// The activity's discriminant.
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Reflection(_) => ActivityKind::Reflection,
            Self::GuidedSession(_) => ActivityKind::GuidedSession,
            Self::Incident(_) => ActivityKind::Incident,
            Self::ManualCredit(_) => ActivityKind::ManualCredit,
        }
    }

    /// Source id for traceability. Manual credits use their own id.
    pub fn source_id(&self) -> &str {
        match self {
            Self::Reflection(a) => &a.source_id,
            Self::GuidedSession(a) => &a.source_id,
            Self::Incident(a) => &a.source_id,
            Self::ManualCredit(r) => &r.id,
        }
    }
}
