//! Output formatting module for CLI

pub mod json;
pub mod terminal;

pub use json::JsonExport;
pub use terminal::TerminalOutput;

use crate::error::DartLensError;
use crate::rules::results::AnalysisResults;

/// Trait for rendering a finished analysis.
pub trait ReportRenderer {
    fn render_report(&self, results: &AnalysisResults) -> Result<String, DartLensError>;
}
