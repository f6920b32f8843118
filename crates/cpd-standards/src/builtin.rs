//! # Built-in Regulator Table
//!
//! The regulator definitions compiled into the engine. Figures follow each
//! regulator's published continuing-development guidance, normalised to
//! hours. Where a regulator counts reflective accounts or "points" rather
//! than hours, the table uses the hour equivalent the regulator suggests.
//!
//! | Id | Regulator | Total | Reflection | Cycle |
//! |----|-----------|-------|------------|-------|
//! | `gmc` | General Medical Council | 50 | 12 | 1 |
//! | `nmc` | Nursing and Midwifery Council | 35 | 5 | 3 |
//! | `hcpc` | Health and Care Professions Council | 30 | - | 2 |
//! | `gphc` | General Pharmaceutical Council | 30 | 4 | 1 |
//! | `gdc` | General Dental Council | 100 | - | 5 |
//! | `goc` | General Optical Council | 36 | 3 | 3 |
//! | `gosc` | General Osteopathic Council | 90 | - | 3 |
//! | `gcc` | General Chiropractic Council | 30 | - | 1 |
//! | `ahpra-medical` | Medical Board of Australia (Ahpra) | 50 | - | 1 |
//! | `mcnz` | Medical Council of New Zealand | 50 | 2 | 1 |

use cpd_core::{CreditCategory, RegulatorId};

use crate::standard::{AnnualRequirement, CategoryMinimum, RegulatoryStandard};

use CreditCategory::*;

/// Compact, `const`-friendly form of a standard.
struct BuiltinEntry {
    id: &'static str,
    name: &'static str,
    total_hours: f64,
    reflection_hours: Option<f64>,
    minimums: &'static [(CreditCategory, f64)],
    cycle_length_years: u32,
    evidence: &'static [&'static str],
    notes: &'static str,
}

const BUILTIN: &[BuiltinEntry] = &[
    BuiltinEntry {
        id: "gmc",
        name: "General Medical Council (GMC)",
        total_hours: 50.0,
        reflection_hours: Some(12.0),
        minimums: &[],
        cycle_length_years: 1,
        evidence: &[
            "Reflective notes on learning and its impact on practice",
            "Quality improvement activity",
            "Significant events",
            "Feedback from patients and colleagues",
            "Compliments and complaints",
        ],
        notes: "Annual appraisal expects at least 50 hours of CPD across the scope of practice. \
                Revalidation takes place every 5 years on the basis of the annual appraisals.",
    },
    BuiltinEntry {
        id: "nmc",
        name: "Nursing and Midwifery Council (NMC)",
        total_hours: 35.0,
        reflection_hours: Some(5.0),
        minimums: &[(LearningDevelopment, 20.0)],
        cycle_length_years: 3,
        evidence: &[
            "Five written reflective accounts",
            "Five pieces of practice-related feedback",
            "Reflective discussion with another NMC registrant",
            "Health and character declaration",
            "Confirmation from an appropriate confirmer",
        ],
        notes: "35 hours of CPD over the three-year revalidation period, of which at least \
                20 hours must be participatory learning with other people.",
    },
    BuiltinEntry {
        id: "hcpc",
        name: "Health and Care Professions Council (HCPC)",
        total_hours: 30.0,
        reflection_hours: None,
        minimums: &[(SelfDirectedLearning, 5.0)],
        cycle_length_years: 2,
        evidence: &[
            "Continuous, up-to-date and accurate record of CPD activities",
            "Mixture of learning activities relevant to current or future practice",
            "Evidence that CPD has improved the quality of practice and service delivery",
            "Evidence that CPD benefits service users",
        ],
        notes: "HCPC audits a random sample of registrants at each two-year renewal. \
                A CPD profile may be requested at any time.",
    },
    BuiltinEntry {
        id: "gphc",
        name: "General Pharmaceutical Council (GPhC)",
        total_hours: 30.0,
        reflection_hours: Some(4.0),
        minimums: &[(PeerReview, 2.0)],
        cycle_length_years: 1,
        evidence: &[
            "Four CPD entries, at least two of them planned learning",
            "One peer discussion record",
            "One reflective account",
        ],
        notes: "Revalidation records are submitted every year by the registration renewal date.",
    },
    BuiltinEntry {
        id: "gdc",
        name: "General Dental Council (GDC)",
        total_hours: 100.0,
        reflection_hours: None,
        minimums: &[(ClinicalPractice, 10.0), (QualityImprovement, 5.0)],
        cycle_length_years: 5,
        evidence: &[
            "Personal development plan",
            "Verifiable CPD certificates",
            "Annual CPD statement",
            "Recommended topics: medical emergencies, disinfection and decontamination, radiography",
        ],
        notes: "Dentists: 100 hours of verifiable CPD over a five-year cycle, \
                with at least 10 hours declared every two years.",
    },
    BuiltinEntry {
        id: "goc",
        name: "General Optical Council (GOC)",
        total_hours: 36.0,
        reflection_hours: Some(3.0),
        minimums: &[(PeerReview, 3.0)],
        cycle_length_years: 3,
        evidence: &[
            "Personal development plan",
            "Peer review participation",
            "Reflective statement at cycle end",
        ],
        notes: "36 CPD points over the three-year cycle, including peer review and a \
                reflective exercise.",
    },
    BuiltinEntry {
        id: "gosc",
        name: "General Osteopathic Council (GOsC)",
        total_hours: 90.0,
        reflection_hours: None,
        minimums: &[(LearningDevelopment, 45.0), (PeerReview, 3.0)],
        cycle_length_years: 3,
        evidence: &[
            "Objective activity (patient feedback, peer observation or clinical audit)",
            "Communication and consent activity",
            "Peer discussion review",
        ],
        notes: "90 hours over the three-year cycle, at least 45 of which must be learning \
                with others.",
    },
    BuiltinEntry {
        id: "gcc",
        name: "General Chiropractic Council (GCC)",
        total_hours: 30.0,
        reflection_hours: None,
        minimums: &[(LearningDevelopment, 15.0)],
        cycle_length_years: 1,
        evidence: &[
            "CPD summary with learning objectives",
            "Record of learning with others",
        ],
        notes: "30 hours per CPD year, at least 15 of which must be learning with others.",
    },
    BuiltinEntry {
        id: "ahpra-medical",
        name: "Medical Board of Australia (Ahpra)",
        total_hours: 50.0,
        reflection_hours: None,
        minimums: &[
            (LearningDevelopment, 12.5),
            (PeerReview, 5.0),
            (ResearchAudit, 5.0),
        ],
        cycle_length_years: 1,
        evidence: &[
            "Professional development plan",
            "Records of educational activities",
            "Records of reviewing performance",
            "Records of measuring outcomes",
        ],
        notes: "50 hours per year: at least 12.5 hours of educational activity and 25 hours \
                of reviewing performance and measuring outcomes (minimum 5 hours each).",
    },
    BuiltinEntry {
        id: "mcnz",
        name: "Medical Council of New Zealand (MCNZ)",
        total_hours: 50.0,
        reflection_hours: Some(2.0),
        minimums: &[(PeerReview, 10.0), (QualityImprovement, 10.0)],
        cycle_length_years: 1,
        evidence: &[
            "Annual conversation record",
            "Professional development plan",
            "Peer review activities",
            "Audit of medical practice",
        ],
        notes: "Recertification requires 50 hours annually, including 10 hours of peer review \
                and 10 hours of audit or quality activity.",
    },
];

impl BuiltinEntry {
    fn to_standard(&self) -> Option<RegulatoryStandard> {
        let id = match RegulatorId::new(self.id) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(id = self.id, error = %e, "built-in standard has invalid id, skipping");
                return None;
            }
        };
        Some(RegulatoryStandard {
            id,
            regulator_name: self.name.to_string(),
            annual_requirement: AnnualRequirement {
                total_hours: self.total_hours,
                minimum_reflection_hours: self.reflection_hours,
                category_minimums: self
                    .minimums
                    .iter()
                    .map(|(category, hours)| CategoryMinimum::new(*category, *hours))
                    .collect(),
            },
            cycle_length_years: self.cycle_length_years,
            required_evidence_kinds: self.evidence.iter().map(|e| e.to_string()).collect(),
            notes: Some(self.notes.to_string()),
        })
    }
}

/// Materialise the built-in regulator table, in table order.
pub fn builtin_standards() -> Vec<RegulatoryStandard> {
    BUILTIN.iter().filter_map(BuiltinEntry::to_standard).collect()
}
