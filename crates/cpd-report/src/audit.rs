//! # Audit Report
//!
//! Section order:
//!
//! 1. Header: regulator, cycle window, generation time.
//! 2. `COMPLIANCE STATUS`: total against required, reflection check.
//! 3. `CATEGORY BREAKDOWN`: category, hours, percentage, minimum, PASS/FAIL.
//! 4. `GAPS`: only when there are gaps.
//! 5. `EVIDENCE REQUIREMENTS`: the standard's descriptors and notes, verbatim.
//! 6. `DETAILED ACTIVITY LOG`: one row per record, oldest first.
//! 7. `SUMMARY`: record count, total hours, record digest, declaration.
//!
//! The footer's `Total Hours` is taken from the summary so that it always
//! agrees with the status block.

use cpd_compliance::Summary;
use cpd_core::{digest_json, CreditRecord, Timestamp};

use crate::csv::CsvWriter;
use crate::error::ReportResult;

/// Joins learning outcomes within one cell.
pub const OUTCOME_SEPARATOR: &str = "; ";

/// Practitioner declaration printed in the footer.
pub const DECLARATION: &str = "I confirm that the activities recorded above are an accurate \
     record of my continuing professional development for this period.";

const ACTIVITY_COLUMNS: [&str; 8] = [
    "Date",
    "Title",
    "Category",
    "Hours",
    "Evidence Type",
    "Learning Outcomes",
    "Description",
    "Source ID",
];

/// Render the audit report for `summary` and the records behind it.
///
/// `records` should be the records within the summary's window; the
/// caller filters them with
/// [`records_in_window`](cpd_compliance::records_in_window).
pub fn format_audit_report(
    records: &[CreditRecord],
    summary: &Summary,
    generated_at: Timestamp,
) -> ReportResult<String> {
    let standard = &summary.standard;
    let mut w = CsvWriter::new();

    w.row(&["CPD AUDIT REPORT"]);
    w.row(&["Regulator", standard.regulator_name.as_str()]);
    w.row(&["Regulator ID", standard.id.as_str()]);
    w.row(&["Cycle Start", summary.window.start.date_string().as_str()]);
    w.row(&["Cycle End", summary.window.end.date_string().as_str()]);
    w.row(&["Cycle Length (years)", standard.cycle_length_years.to_string().as_str()]);
    w.row(&["Generated", generated_at.to_iso8601().as_str()]);

    w.section("COMPLIANCE STATUS");
    w.row(&["Total Hours Logged".to_string(), hours(summary.total_hours)]);
    w.row(&["Required Hours".to_string(), hours(summary.required_hours())]);
    w.row(&["Progress".to_string(), format!("{:.1}%", summary.progress_percent)]);
    if let Some(min_reflection) = standard.minimum_reflection_hours() {
        let logged = summary.reflection_hours();
        w.row(&["Reflection Hours".to_string(), hours(logged)]);
        w.row(&["Required Reflection Hours".to_string(), hours(min_reflection)]);
        w.row(&["Reflection Check".to_string(), pass_fail(logged, min_reflection).to_string()]);
    }
    w.row(&[
        "Status",
        if summary.meets_requirements {
            "COMPLIANT"
        } else {
            "NOT YET COMPLIANT"
        },
    ]);

    w.section("CATEGORY BREAKDOWN");
    w.row(&["Category", "Hours", "Percentage", "Minimum Required", "Status"]);
    for entry in &summary.category_breakdown {
        let minimum = standard.minimum_for(entry.category);
        w.row(&[
            entry.label.clone(),
            hours(entry.hours),
            format!("{:.1}%", entry.percentage),
            minimum.map(hours).unwrap_or_else(|| "None".to_string()),
            minimum
                .map(|m| pass_fail(entry.hours, m))
                .unwrap_or("PASS")
                .to_string(),
        ]);
    }
    for minimum in standard.category_minimums() {
        if summary.category_breakdown.iter().all(|b| b.category != minimum.category) {
            w.row(&[
                minimum.category.label().to_string(),
                hours(0.0),
                format!("{:.1}%", 0.0),
                hours(minimum.minimum_hours),
                pass_fail(0.0, minimum.minimum_hours).to_string(),
            ]);
        }
    }

    if !summary.gaps.is_empty() {
        w.section("GAPS");
        for gap in &summary.gaps {
            w.row(&[gap.as_str()]);
        }
    }

    w.section("EVIDENCE REQUIREMENTS");
    for descriptor in &standard.required_evidence_kinds {
        w.row(&[descriptor.as_str()]);
    }
    if let Some(notes) = &standard.notes {
        w.row(&["Notes", notes.as_str()]);
    }

    let mut ordered: Vec<&CreditRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.date);

    w.section("DETAILED ACTIVITY LOG");
    w.row(&ACTIVITY_COLUMNS);
    for record in &ordered {
        w.row(&[
            record.date.date_string(),
            record.title.clone(),
            record.category.label().to_string(),
            hours(record.hours),
            record.evidence_kind.as_str().to_string(),
            record.outcomes_joined(OUTCOME_SEPARATOR),
            record.description.clone(),
            record.linked_source_id.clone().unwrap_or_default(),
        ]);
    }

    let digest = digest_json(&ordered)?;

    w.section("SUMMARY");
    w.row(&["Total Records".to_string(), ordered.len().to_string()]);
    w.row(&["Total Hours".to_string(), hours(summary.total_hours)]);
    w.row(&["Record Digest".to_string(), digest.to_string()]);
    w.blank();
    w.row(&["Declaration", DECLARATION]);
    w.row(&["Signature", ""]);
    w.row(&["Date", ""]);

    tracing::debug!(
        regulator = %standard.id,
        records = ordered.len(),
        digest = %digest,
        "formatted audit report"
    );
    Ok(w.finish())
}

/// Suggested file name, e.g. `cpd-audit-gmc-2024-06-15.csv`.
pub fn report_file_name(summary: &Summary, generated_at: Timestamp) -> String {
    format!(
        "cpd-audit-{}-{}.csv",
        summary.standard.id,
        generated_at.date_string()
    )
}

fn hours(value: f64) -> String {
    format!("{value:.2}")
}

fn pass_fail(logged: f64, required: f64) -> &'static str {
    if required - logged > cpd_compliance::HOURS_EPSILON {
        "FAIL"
    } else {
        "PASS"
    }
}
