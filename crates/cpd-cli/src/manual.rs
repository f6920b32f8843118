//! # Manual Subcommand
//!
//! Manages self-entered credits in the manual store. New records are
//! unverified and receive a fresh `manual-` id; there is no edit, a
//! correction is `remove` followed by `add`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use cpd_core::{CreditCategory, EvidenceKind, Timestamp};
use cpd_store::{add_record, new_manual_record, remove_record, ManualCreditInput, ManualCreditStore};

use crate::engine::{resolve_now, Engine};
use crate::EXIT_OK;

/// Arguments for `cpd manual`.
#[derive(Args, Debug)]
pub struct ManualArgs {
    #[command(subcommand)]
    pub command: ManualCommand,
}

#[derive(Subcommand, Debug)]
pub enum ManualCommand {
    /// Record a manually entered credit.
    Add(AddArgs),
    /// Remove a manual credit by id.
    Remove {
        /// Record id (`manual-…`).
        id: String,
    },
    /// List stored manual credits.
    List {
        /// Emit records as a JSON array.
        #[arg(long)]
        json: bool,
    },
}

/// Fields of a new manual credit.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// When the activity took place (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub date: String,

    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Credit category, e.g. `learning-development`.
    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub hours: f64,

    /// Evidence kind: reflection, course, conference, reading, teaching, audit or other.
    #[arg(long, default_value = "other")]
    pub evidence: String,

    /// Learning outcome; repeat for several.
    #[arg(long = "outcome")]
    pub outcomes: Vec<String>,

    /// Creation timestamp override.
    #[arg(long, value_name = "TIMESTAMP")]
    pub now: Option<String>,
}

/// Execute the manual subcommand.
pub fn run_manual(args: &ManualArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    let mut store = engine.store();
    match &args.command {
        ManualCommand::Add(add) => {
            let input = ManualCreditInput {
                date: Timestamp::parse(&add.date)
                    .with_context(|| format!("invalid --date value: {}", add.date))?,
                title: add.title.clone(),
                description: add.description.clone(),
                category: add
                    .category
                    .parse::<CreditCategory>()
                    .with_context(|| format!("invalid --category value: {}", add.category))?,
                hours: add.hours,
                evidence_kind: add
                    .evidence
                    .parse::<EvidenceKind>()
                    .with_context(|| format!("invalid --evidence value: {}", add.evidence))?,
                learning_outcomes: Some(add.outcomes.clone()),
            };
            let record = new_manual_record(input, resolve_now(add.now.as_deref())?);
            let id = record.id.clone();
            add_record(&mut store, record)
                .with_context(|| format!("failed to save manual credit to {}", store.path().display()))?;
            writeln!(out, "{id}")?;
        }
        ManualCommand::Remove { id } => {
            let removed = remove_record(&mut store, id)?;
            writeln!(out, "removed {} ({})", removed.id, removed.title)?;
        }
        ManualCommand::List { json } => {
            let records = store.load()?;
            if *json {
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            } else {
                for record in &records {
                    writeln!(
                        out,
                        "{}  {:>6.2}h  {:<24} {}  [{}]",
                        record.date.date_string(),
                        record.hours,
                        record.category.label(),
                        record.title,
                        record.id
                    )?;
                }
            }
        }
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::engine::GlobalOptions;

    fn engine(dir: &tempfile::TempDir) -> Engine {
        let options = GlobalOptions {
            store: Some(dir.path().join("store.json")),
            ..GlobalOptions::default()
        };
        Engine::from_config(CliConfig::default(), &options).unwrap()
    }

    fn add_args(category: &str) -> ManualArgs {
        ManualArgs {
            command: ManualCommand::Add(AddArgs {
                date: "2024-04-01".to_string(),
                title: "ALS refresher".to_string(),
                description: String::new(),
                category: category.to_string(),
                hours: 2.0,
                evidence: "course".to_string(),
                outcomes: vec!["Updated algorithm".to_string()],
                now: Some("2024-04-02T10:00:00Z".to_string()),
            }),
        }
    }

    #[test]
    fn add_list_remove() {
        let dir = tempfile::tempdir().unwrap();
        let engine = engine(&dir);

        let mut out = Vec::new();
        run_manual(&add_args("learning-development"), &engine, &mut out).unwrap();
        let id = String::from_utf8(out).unwrap().trim().to_string();
        assert!(id.starts_with("manual-"));

        let stored = engine.store().load().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(!stored[0].verified);
        assert_eq!(stored[0].category, CreditCategory::LearningDevelopment);
        assert_eq!(stored[0].learning_outcomes, Some(vec!["Updated algorithm".to_string()]));

        let mut out = Vec::new();
        let list = ManualArgs {
            command: ManualCommand::List { json: false },
        };
        run_manual(&list, &engine, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("ALS refresher"));

        let remove = ManualArgs {
            command: ManualCommand::Remove { id: id.clone() },
        };
        run_manual(&remove, &engine, &mut Vec::new()).unwrap();
        assert!(engine.store().load().unwrap().is_empty());
        assert!(run_manual(&remove, &engine, &mut Vec::new()).is_err());
    }

    #[test]
    fn bad_category_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let engine = engine(&dir);
        let err = run_manual(&add_args("astrology"), &engine, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("astrology"));
        assert!(engine.store().load().unwrap().is_empty());
    }
}
