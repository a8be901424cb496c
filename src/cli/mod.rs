//! # CLI Module
//!
//! Defines the command-line interface for dartlens using `clap`.
//!
//! ## Options
//!
//! - `-p, --project <DIR>` - Project root to scan (defaults to `.`)
//! - `-v, --verbose` - List affected files under each finding
//! - `-j, --json <FILE>` - Additionally write the JSON export to this path
//!
//! ## Examples
//!
//! ```bash
//! # Audit the current directory
//! dartlens
//!
//! # Audit a project with file details and a JSON report for CI
//! dartlens --project ./my_app --verbose --json report.json
//! ```

pub mod exit_codes;
pub mod output;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::error::DartLensError;
use crate::rules::AnalysisEngine;
use crate::scanner::Scanner;
use output::{JsonExport, ReportRenderer, TerminalOutput};

/// dartlens - Audit Flutter/Dart projects without the Dart toolchain
#[derive(Parser, Debug)]
#[command(name = "dartlens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub project: PathBuf,

    /// Show affected files under each finding
    #[arg(short, long)]
    pub verbose: bool,

    /// Export results to a JSON file
    #[arg(short, long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

/// Run the analysis and return the process exit code.
pub fn execute(cli: &Cli) -> Result<i32, DartLensError> {
    let scanner = Scanner::new(cli.project.clone());
    let engine = AnalysisEngine::new();
    let results = engine.run(&scanner);

    // The full report is always printed, even when gating fails
    let terminal = TerminalOutput::new(cli.verbose);
    print!("{}", terminal.render_report(&results)?);

    if let Some(path) = &cli.json {
        let export = JsonExport::new().render_report(&results)?;
        std::fs::write(path, export).map_err(|e| DartLensError::ReportWrite {
            path: path.display().to_string(),
            source: e,
        })?;
        println!(
            "\n📄 Results exported to {}",
            path.display().to_string().cyan()
        );
    }

    if results.has_failures() {
        Ok(exit_codes::CHECKS_FAILED)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
