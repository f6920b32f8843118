//! # Credit Category — Single Source of Truth
//!
//! Defines the closed `CreditCategory` enumeration used by the credit
//! generator, the standards registry (category minimums), the compliance
//! evaluator, and the audit report.
//!
//! Every `match` on `CreditCategory` must be exhaustive. Adding a new
//! category is a compile error until every label, description and colour
//! arm is updated.
//!
//! The colour token is a presentation hint for display collaborators and
//! carries no meaning inside the engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// All professional-development credit categories.
///
/// | # | Category | Wire name |
/// |---|----------|-----------|
/// |  1 | Clinical practice | `clinical-practice` |
/// |  2 | Teaching & training | `teaching-training` |
/// |  3 | Research & audit | `research-audit` |
/// |  4 | Learning & development | `learning-development` |
/// |  5 | Leadership & management | `leadership-management` |
/// |  6 | Quality improvement | `quality-improvement` |
/// |  7 | Reflection | `reflection` |
/// |  8 | Professional activities | `professional-activities` |
/// |  9 | Peer review | `peer-review` |
/// | 10 | Self-directed learning | `self-directed-learning` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreditCategory {
    /// Direct patient or client care activity with a learning component.
    ClinicalPractice,
    /// Delivering teaching, supervision or training to others.
    TeachingTraining,
    /// Research, clinical audit and evaluation work.
    ResearchAudit,
    /// Courses, conferences, e-learning and other formal learning.
    LearningDevelopment,
    /// Leadership, management and organisational roles.
    LeadershipManagement,
    /// Quality improvement projects and significant-event reviews.
    QualityImprovement,
    /// Structured reflective practice.
    Reflection,
    /// Committee, regulatory and professional-body work.
    ProfessionalActivities,
    /// Peer discussion, peer review and case-based discussion.
    PeerReview,
    /// Independent reading and self-directed study.
    SelfDirectedLearning,
}

/// Total number of credit categories.
pub const CREDIT_CATEGORY_COUNT: usize = 10;

impl CreditCategory {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [CreditCategory] {
        &[
            Self::ClinicalPractice,
            Self::TeachingTraining,
            Self::ResearchAudit,
            Self::LearningDevelopment,
            Self::LeadershipManagement,
            Self::QualityImprovement,
            Self::Reflection,
            Self::ProfessionalActivities,
            Self::PeerReview,
            Self::SelfDirectedLearning,
        ]
    }

    /// Returns the kebab-case wire identifier. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClinicalPractice => "clinical-practice",
            Self::TeachingTraining => "teaching-training",
            Self::ResearchAudit => "research-audit",
            Self::LearningDevelopment => "learning-development",
            Self::LeadershipManagement => "leadership-management",
            Self::QualityImprovement => "quality-improvement",
            Self::Reflection => "reflection",
            Self::ProfessionalActivities => "professional-activities",
            Self::PeerReview => "peer-review",
            Self::SelfDirectedLearning => "self-directed-learning",
        }
    }

    /// Human-readable display label, used in gap messages and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClinicalPractice => "Clinical Practice",
            Self::TeachingTraining => "Teaching & Training",
            Self::ResearchAudit => "Research & Audit",
            Self::LearningDevelopment => "Learning & Development",
            Self::LeadershipManagement => "Leadership & Management",
            Self::QualityImprovement => "Quality Improvement",
            Self::Reflection => "Reflective Practice",
            Self::ProfessionalActivities => "Professional Activities",
            Self::PeerReview => "Peer Review",
            Self::SelfDirectedLearning => "Self-Directed Learning",
        }
    }

    /// One-line description of what counts towards the category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ClinicalPractice => "Learning embedded in direct clinical work",
            Self::TeachingTraining => "Teaching, supervising or training colleagues and students",
            Self::ResearchAudit => "Research projects, clinical audit and service evaluation",
            Self::LearningDevelopment => "Courses, conferences, workshops and e-learning",
            Self::LeadershipManagement => "Leadership, management and organisational roles",
            Self::QualityImprovement => "Quality improvement projects and significant-event analysis",
            Self::Reflection => "Structured reflection on practice and experience",
            Self::ProfessionalActivities => "Committee, regulatory and professional-body work",
            Self::PeerReview => "Peer discussion, case review and feedback",
            Self::SelfDirectedLearning => "Independent reading and self-directed study",
        }
    }

    /// Presentation colour token (hex RGB).
    pub fn color(&self) -> &'static str {
        match self {
            Self::ClinicalPractice => "#2563eb",
            Self::TeachingTraining => "#7c3aed",
            Self::ResearchAudit => "#0891b2",
            Self::LearningDevelopment => "#16a34a",
            Self::LeadershipManagement => "#ea580c",
            Self::QualityImprovement => "#ca8a04",
            Self::Reflection => "#db2777",
            Self::ProfessionalActivities => "#4b5563",
            Self::PeerReview => "#0d9488",
            Self::SelfDirectedLearning => "#65a30d",
        }
    }
}

impl std::fmt::Display for CreditCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditCategory {
    type Err = ValidationError;

    /// Parse from the kebab-case identifier. The snake_case spelling is
    /// accepted too, since YAML packs are frequently written that way.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}
