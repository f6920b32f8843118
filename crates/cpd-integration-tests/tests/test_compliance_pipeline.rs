//! # Compliance Pipeline — End-to-End Integration Tests
//!
//! Exercises the full pipeline across crates:
//!
//! ```text
//! Raw activity (JSON)
//!   -> Credit generation (CreditGenerator)
//!   -> Merge with manual credits (ManualCreditStore, merge_records)
//!   -> Cycle window + evaluation (evaluate)
//!   -> Audit report (format_audit_report)
//! ```
//!
//! Verifies:
//!
//! - The reference scenario: reflection + guided session + manual course
//!   against a 50 h / 12 h reflection standard.
//! - Idempotent regeneration and duplicate-free recombination.
//! - Report footer totals agree with the summary.
//! - Standards packs override built-in regulators.
//! - Unknown regulators fail fast.

use serde_json::{json, Value};

use cpd_compliance::{evaluate, evaluate_standard, records_in_window, Summary};
use cpd_core::{CreditCategory, CreditRecord, EvidenceKind, RegulatorId, Timestamp};
use cpd_credit::{merge_records, CreditGenerator, SkipReason};
use cpd_report::format_audit_report;
use cpd_standards::{StandardsError, StandardsRegistry};
use cpd_store::{add_record, new_manual_record, JsonFileStore, ManualCreditInput, ManualCreditStore};

// =========================================================================
// Fixtures
// =========================================================================

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

fn activities() -> Vec<Value> {
    vec![
        json!({
            "kind": "reflection",
            "sourceId": "refl-001",
            "date": "2024-03-01T09:00:00Z",
            "framework": "Gibbs Reflective Cycle",
            "answers": [
                {"key": "description", "text": "Missed sepsis signs at triage."},
                {"key": "learning", "text": "Apply NEWS2 on every reassessment."}
            ]
        }),
        json!({
            "kind": "guided_session",
            "sourceId": "guided-007",
            "date": "2024-03-02T18:00:00Z",
            "space": "Difficult Conversations",
            "answers": [{"key": "prompt_1", "text": "Breaking bad news to a family."}]
        }),
    ]
}

fn manual_course() -> CreditRecord {
    new_manual_record(
        ManualCreditInput {
            date: ts("2024-04-01"),
            title: "ALS refresher".to_string(),
            description: "Resuscitation Council course".to_string(),
            category: CreditCategory::LearningDevelopment,
            hours: 2.0,
            evidence_kind: EvidenceKind::Course,
            learning_outcomes: None,
        },
        ts("2024-04-01T17:00:00Z"),
    )
}

fn registry_with_reference_standard() -> StandardsRegistry {
    let mut registry = StandardsRegistry::builtin();
    registry
        .merge_pack_str(
            r#"
standards:
  - id: reference
    regulator_name: Reference Regulator
    cycle_length_years: 1
    annual_requirement:
      total_hours: 50
      minimum_reflection_hours: 12
    required_evidence_kinds:
      - Reflective notes
"#,
        )
        .unwrap();
    registry
}

fn reference_summary() -> (Vec<CreditRecord>, Summary) {
    let generated = CreditGenerator::new().generate_from_json(&activities());
    assert!(generated.skipped.is_empty());
    let records = merge_records(generated.records, vec![manual_course()]);
    let summary = evaluate(
        &records,
        &registry_with_reference_standard(),
        &RegulatorId::new("reference").unwrap(),
        ts("2024-06-15T12:00:00Z"),
    )
    .unwrap();
    (records, summary)
}

// =========================================================================
// Reference scenario
// =========================================================================

#[test]
fn reference_scenario_totals() {
    let (_, summary) = reference_summary();
    assert!((summary.total_hours - 3.5).abs() < 1e-9);
    assert!((summary.category_hours(CreditCategory::Reflection) - 1.5).abs() < 1e-9);
    assert!((summary.category_hours(CreditCategory::LearningDevelopment) - 2.0).abs() < 1e-9);
    assert_eq!(summary.record_count, 3);
}

#[test]
fn reference_scenario_gaps() {
    let (_, summary) = reference_summary();
    assert!(!summary.meets_requirements);
    assert_eq!(summary.gaps.len(), 2);
    assert!(summary.gaps[0].contains("46.5"), "{}", summary.gaps[0]);
    assert!(summary.gaps[1].contains("10.5"), "{}", summary.gaps[1]);
}

#[test]
fn reference_scenario_breakdown_order() {
    let (_, summary) = reference_summary();
    let order: Vec<CreditCategory> = summary.category_breakdown.iter().map(|b| b.category).collect();
    assert_eq!(
        order,
        vec![CreditCategory::LearningDevelopment, CreditCategory::Reflection]
    );
    let total: f64 = summary.category_breakdown.iter().map(|b| b.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn manual_record_stays_unverified() {
    let (records, _) = reference_summary();
    let manual: Vec<&CreditRecord> = records.iter().filter(|r| !r.verified).collect();
    assert_eq!(manual.len(), 1);
    assert!(manual[0].id.starts_with("manual-"));
}

// =========================================================================
// Idempotent generation
// =========================================================================

#[test]
fn regeneration_is_byte_identical() {
    let generator = CreditGenerator::new();
    let first = generator.generate_from_json(&activities()).records;
    let second = generator.generate_from_json(&activities()).records;
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn recombining_regenerated_records_does_not_duplicate() {
    let generator = CreditGenerator::new();
    let earlier = generator.generate_from_json(&activities()).records;
    let again = generator.generate_from_json(&activities()).records;
    let merged = merge_records(again, earlier.clone());
    assert_eq!(merged.len(), earlier.len());

    let summary = evaluate_standard(
        &merged,
        registry_with_reference_standard().get_str("reference").unwrap(),
        ts("2024-06-15"),
    );
    assert!((summary.total_hours - 1.5).abs() < 1e-9);
}

#[test]
fn malformed_activity_does_not_block_summary() {
    let mut values = activities();
    values.push(json!({"kind": "reflection", "sourceId": "no-date"}));
    values.push(json!({"kind": "voice_memo", "sourceId": "v-1", "date": "2024-03-03"}));
    let generation = CreditGenerator::new().generate_from_json(&values);
    assert_eq!(generation.records.len(), 2);
    assert_eq!(generation.skipped.len(), 2);
    assert_eq!(generation.skipped[0].reason, SkipReason::MissingDate);
    assert_eq!(
        generation.skipped[1].reason,
        SkipReason::UnknownKind("voice_memo".to_string())
    );
}

// =========================================================================
// Report
// =========================================================================

#[test]
fn report_footer_matches_summary_total() {
    let (records, summary) = reference_summary();
    let in_window: Vec<CreditRecord> = records_in_window(&records, &summary.window)
        .into_iter()
        .cloned()
        .collect();
    let report = format_audit_report(&in_window, &summary, ts("2024-06-15T12:00:00Z")).unwrap();

    let footer_total = report
        .lines()
        .find_map(|l| l.strip_prefix("Total Hours,"))
        .unwrap();
    assert_eq!(footer_total, format!("{:.2}", summary.total_hours));
    assert_eq!(footer_total, "3.50");
    assert!(report.contains("Reference Regulator"));
    assert!(report.contains("Reflection: Gibbs Reflective Cycle"));
    assert!(report.contains("Apply NEWS2 on every reassessment."));
}

#[test]
fn report_is_deterministic_for_pinned_inputs() {
    let (records, summary) = reference_summary();
    let a = format_audit_report(&records, &summary, ts("2024-06-15")).unwrap();
    let b = format_audit_report(&records, &summary, ts("2024-06-15")).unwrap();
    assert_eq!(a, b);
}

// =========================================================================
// Registry
// =========================================================================

#[test]
fn unknown_regulator_fails_fast() {
    let err = evaluate(
        &[],
        &StandardsRegistry::builtin(),
        &RegulatorId::new("atlantis-medical").unwrap(),
        ts("2024-06-15"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        cpd_compliance::ComplianceError::Standards(StandardsError::UnknownRegulator { .. })
    ));
}

#[test]
fn multi_year_standard_counts_whole_block() {
    let registry = StandardsRegistry::builtin();
    let gdc = registry.get_str("gdc").unwrap();
    assert_eq!(gdc.cycle_length_years, 5);

    let generator = CreditGenerator::new();
    let values = vec![
        json!({"kind": "reflection", "sourceId": "a", "date": "2025-02-01"}),
        json!({"kind": "reflection", "sourceId": "b", "date": "2029-11-30"}),
        json!({"kind": "reflection", "sourceId": "c", "date": "2024-12-31T23:59:59Z"}),
    ];
    let records = generator.generate_from_json(&values).records;
    let summary = evaluate_standard(&records, gdc, ts("2027-03-01"));
    assert_eq!(summary.window.start.to_iso8601(), "2025-01-01T00:00:00Z");
    assert_eq!(summary.window.end.to_iso8601(), "2029-12-31T23:59:59Z");
    assert_eq!(summary.record_count, 2);
}

// =========================================================================
// Manual store round trip through the pipeline
// =========================================================================

#[test]
fn stored_manual_records_feed_the_summary() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("cpd_manual_credits.json"));
    add_record(&mut store, manual_course()).unwrap();

    let generated = CreditGenerator::new().generate_from_json(&activities()).records;
    let records = merge_records(generated, store.load().unwrap());
    let summary = evaluate(
        &records,
        &registry_with_reference_standard(),
        &RegulatorId::new("reference").unwrap(),
        ts("2024-06-15"),
    )
    .unwrap();
    assert!((summary.total_hours - 3.5).abs() < 1e-9);
}
