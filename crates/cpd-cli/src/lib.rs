//! # cpd-cli — CLI for the CPD Compliance Engine
//!
//! Provides the `cpd` command-line interface. The binary is the external
//! collaborator around the engine: it reads activity files, owns the
//! manual credit store, supplies the wall clock and writes reports.
//!
//! ## Subcommands
//!
//! - `cpd standards`: list the regulator registry.
//! - `cpd credits`: generated and manual credit records.
//! - `cpd summary`: compliance summary; exit code 1 when not compliant.
//! - `cpd report`: CSV audit report.
//! - `cpd manual`: add, remove or list manual credits.
//!
//! ```bash
//! cpd summary --regulator gmc --activities activities.json
//! cpd report --regulator nmc --activities activities.json --out audit.csv
//! cpd manual add --date 2024-04-01 --title "ALS refresher" \
//!     --category learning-development --hours 2 --evidence course
//! ```

pub mod config;
pub mod credits;
pub mod engine;
pub mod manual;
pub mod report;
pub mod standards;
pub mod summary;

/// Exit code for a compliant summary or a successful command.
pub const EXIT_OK: u8 = 0;

/// Exit code when the summary shows unmet requirements.
pub const EXIT_NOT_COMPLIANT: u8 = 1;

/// Exit code for operational errors.
pub const EXIT_ERROR: u8 = 2;
