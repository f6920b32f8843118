//! # Standards Subcommand
//!
//! Lists the regulators in the registry, built-in entries first, then any
//! merged from standards packs.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use cpd_standards::RegulatoryStandard;

use crate::engine::Engine;
use crate::EXIT_OK;

/// Arguments for `cpd standards`.
#[derive(Args, Debug)]
pub struct StandardsArgs {
    /// Emit the full standards as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the standards subcommand.
pub fn run_standards(args: &StandardsArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    if args.json {
        let standards: Vec<&RegulatoryStandard> = engine.registry.iter().collect();
        serde_json::to_writer_pretty(&mut *out, &standards)?;
        writeln!(out)?;
        return Ok(EXIT_OK);
    }

    writeln!(
        out,
        "{:<16} {:>7} {:>10} {:>6}  REGULATOR",
        "ID", "HOURS", "REFLECTION", "CYCLE"
    )?;
    for standard in engine.registry.iter() {
        let reflection = standard
            .minimum_reflection_hours()
            .map(|h| format!("{h:.1}"))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<16} {:>7.1} {:>10} {:>5}y  {}",
            standard.id.as_str(),
            standard.total_hours(),
            reflection,
            standard.cycle_length_years,
            standard.regulator_name
        )?;
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::engine::GlobalOptions;

    fn engine() -> Engine {
        Engine::from_config(CliConfig::default(), &GlobalOptions::default()).unwrap()
    }

    #[test]
    fn table_lists_builtin_regulators() {
        let mut out = Vec::new();
        let code = run_standards(&StandardsArgs { json: false }, &engine(), &mut out).unwrap();
        assert_eq!(code, EXIT_OK);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("ID"));
        assert!(text.contains("gmc"));
        assert!(text.contains("General Medical Council"));
        assert!(text.contains("ahpra-medical"));
    }

    #[test]
    fn json_output_parses() {
        let mut out = Vec::new();
        run_standards(&StandardsArgs { json: true }, &engine(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), engine().registry.len());
        assert_eq!(list[0]["id"], "gmc");
        assert_eq!(list[0]["annual_requirement"]["total_hours"], 50.0);
    }
}
