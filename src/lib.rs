//! dartlens Library
//!
//! This crate provides the core functionality for statically analyzing
//! Flutter/Dart projects without requiring the Dart toolchain: a catalog of
//! pattern-matching checks across security, code quality, structure,
//! testing, and dependencies, aggregated into a severity-ranked report.

pub mod cli;
pub mod error;
pub mod rules;
pub mod scanner;

pub use error::DartLensError;
pub use rules::{AnalysisEngine, AnalysisResults, CheckResult, CheckStatus, Severity};
pub use scanner::Scanner;
