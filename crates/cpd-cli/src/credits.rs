//! # Credits Subcommand
//!
//! Prints the full record set: credits generated from the activity file
//! followed by stored manual credits, de-duplicated by id.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::engine::Engine;
use crate::EXIT_OK;

/// Arguments for `cpd credits`.
#[derive(Args, Debug)]
pub struct CreditsArgs {
    /// JSON file of captured activities.
    #[arg(long, value_name = "FILE")]
    pub activities: Option<PathBuf>,

    /// Emit records as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Execute the credits subcommand.
pub fn run_credits(args: &CreditsArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    let records = engine.collect_records(args.activities.as_deref())?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        return Ok(EXIT_OK);
    }

    for record in &records {
        writeln!(
            out,
            "{}  {:>6.2}h  {:<24} {}{}  [{}]",
            record.date.date_string(),
            record.hours,
            record.category.label(),
            record.title,
            if record.verified { "" } else { " (unverified)" },
            record.id
        )?;
    }
    let total: f64 = records.iter().map(|r| r.hours).sum();
    writeln!(out, "{} records, {:.2} hours", records.len(), total)?;
    Ok(EXIT_OK)
}
