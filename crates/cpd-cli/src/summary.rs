//! # Summary Subcommand
//!
//! Evaluates the record set against one regulator for the cycle in effect
//! at `--now`. Exit code 0 when every requirement is met, 1 otherwise.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use cpd_compliance::{evaluate, Summary};
use cpd_core::Timestamp;

use crate::engine::{resolve_now, Engine};
use crate::{EXIT_NOT_COMPLIANT, EXIT_OK};

/// Arguments for `cpd summary`.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Regulator id (defaults to `default_regulator` from the config).
    #[arg(long, short)]
    pub regulator: Option<String>,

    /// JSON file of captured activities.
    #[arg(long, value_name = "FILE")]
    pub activities: Option<PathBuf>,

    /// Evaluate as of this instant instead of the current time.
    #[arg(long, value_name = "TIMESTAMP")]
    pub now: Option<String>,

    /// Emit the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the summary subcommand.
pub fn run_summary(args: &SummaryArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    let regulator = engine.regulator(args.regulator.as_deref())?;
    let now = resolve_now(args.now.as_deref())?;
    let records = engine.collect_records(args.activities.as_deref())?;
    let summary = evaluate(&records, &engine.registry, &regulator, now)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        write_summary(&summary, now, out)?;
    }

    Ok(if summary.meets_requirements {
        EXIT_OK
    } else {
        EXIT_NOT_COMPLIANT
    })
}

fn write_summary(summary: &Summary, now: Timestamp, out: &mut impl Write) -> Result<()> {
    let standard = &summary.standard;
    writeln!(out, "Regulator: {} ({})", standard.regulator_name, standard.id)?;
    writeln!(
        out,
        "Cycle:     {} ({} days remaining)",
        summary.window,
        summary.window.days_remaining(now)
    )?;
    writeln!(
        out,
        "Total:     {:.2} / {:.2} hours ({:.1}%) from {} records",
        summary.total_hours,
        summary.required_hours(),
        summary.progress_percent,
        summary.record_count
    )?;
    if let Some(min) = standard.minimum_reflection_hours() {
        writeln!(
            out,
            "Reflection: {:.2} / {:.2} hours",
            summary.reflection_hours(),
            min
        )?;
    }

    if !summary.category_breakdown.is_empty() {
        writeln!(out)?;
        writeln!(out, "Categories:")?;
        for entry in &summary.category_breakdown {
            writeln!(
                out,
                "  {:<26} {:>7.2}h {:>6.1}%",
                entry.label, entry.hours, entry.percentage
            )?;
        }
    }

    writeln!(out)?;
    if summary.meets_requirements {
        writeln!(out, "Status: COMPLIANT")?;
    } else {
        writeln!(out, "Status: NOT YET COMPLIANT")?;
        for gap in &summary.gaps {
            writeln!(out, "  - {gap}")?;
        }
    }
    Ok(())
}
