//! # cpd CLI entry point
//!
//! Parses command-line arguments, initialises tracing and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cpd_cli::credits::{run_credits, CreditsArgs};
use cpd_cli::engine::{Engine, GlobalOptions};
use cpd_cli::manual::{run_manual, ManualArgs};
use cpd_cli::report::{run_report, ReportArgs};
use cpd_cli::standards::{run_standards, StandardsArgs};
use cpd_cli::summary::{run_summary, SummaryArgs};
use cpd_cli::EXIT_ERROR;

/// Continuing professional development compliance engine.
///
/// Generates credit records from captured reflective activity, evaluates
/// them against a regulator's requirements for the current cycle, and
/// produces audit reports.
#[derive(Parser, Debug)]
#[command(name = "cpd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./cpd.yaml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra standards pack to merge into the registry. Repeatable.
    #[arg(long = "standards", global = true, value_name = "PACK")]
    standards: Vec<PathBuf>,

    /// Manual credit store file.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List regulators and their requirements.
    Standards(StandardsArgs),

    /// List generated and manual credit records.
    Credits(CreditsArgs),

    /// Evaluate compliance for the current cycle.
    Summary(SummaryArgs),

    /// Produce a CSV audit report.
    Report(ReportArgs),

    /// Manage manually entered credits.
    Manual(ManualArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "cpd starting");

    let options = GlobalOptions {
        config: cli.config,
        standards: cli.standards,
        store: cli.store,
    };

    let result = Engine::load(&options).and_then(|engine| {
        let mut out = std::io::stdout().lock();
        match &cli.command {
            Commands::Standards(args) => run_standards(args, &engine, &mut out),
            Commands::Credits(args) => run_credits(args, &engine, &mut out),
            Commands::Summary(args) => run_summary(args, &engine, &mut out),
            Commands::Report(args) => run_report(args, &engine, &mut out),
            Commands::Manual(args) => run_manual(args, &engine, &mut out),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
