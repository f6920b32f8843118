//! # Report Subcommand
//!
//! Writes the CSV audit report for one regulator to stdout or `--out`.
//! `--now` pins both the cycle window and the generation timestamp, so a
//! pinned run is byte-for-byte reproducible.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cpd_compliance::{evaluate, records_in_window};
use cpd_core::CreditRecord;
use cpd_report::{format_audit_report, report_file_name};

use crate::engine::{resolve_now, Engine};
use crate::EXIT_OK;

/// Arguments for `cpd report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Regulator id (defaults to `default_regulator` from the config).
    #[arg(long, short)]
    pub regulator: Option<String>,

    /// JSON file of captured activities.
    #[arg(long, value_name = "FILE")]
    pub activities: Option<PathBuf>,

    /// Output file or directory. A directory receives a dated file name.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Evaluate and stamp the report as of this instant.
    #[arg(long, value_name = "TIMESTAMP")]
    pub now: Option<String>,
}

/// Execute the report subcommand.
pub fn run_report(args: &ReportArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    let regulator = engine.regulator(args.regulator.as_deref())?;
    let now = resolve_now(args.now.as_deref())?;
    let records = engine.collect_records(args.activities.as_deref())?;
    let summary = evaluate(&records, &engine.registry, &regulator, now)?;

    let in_window: Vec<CreditRecord> = records_in_window(&records, &summary.window)
        .into_iter()
        .cloned()
        .collect();
    let report = format_audit_report(&in_window, &summary, now)?;

    match &args.out {
        Some(target) => {
            let path = if target.is_dir() {
                target.join(report_file_name(&summary, now))
            } else {
                target.clone()
            };
            std::fs::write(&path, &report)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            tracing::info!(path = %path.display(), records = in_window.len(), "wrote audit report");
            writeln!(out, "{}", path.display())?;
        }
        None => out.write_all(report.as_bytes())?,
    }
    Ok(EXIT_OK)
}
