//! JSON export formatting
//!
//! Schema (field names are part of the contract):
//!
//! ```json
//! {
//!   "timestamp": "<RFC3339>",
//!   "total_checks": 9,
//!   "passed": 7,
//!   "failed": 0,
//!   "warnings": 2,
//!   "results": [ { "category", "check_name", "status", "message",
//!                  "files_affected", "severity" } ]
//! }
//! ```

use chrono::Utc;
use serde::Serialize;

use super::ReportRenderer;
use crate::error::DartLensError;
use crate::rules::results::{AnalysisResults, CheckResult};

pub struct JsonExport;

impl JsonExport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonExport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    timestamp: String,
    total_checks: usize,
    passed: usize,
    failed: usize,
    warnings: usize,
    results: &'a [CheckResult],
}

impl ReportRenderer for JsonExport {
    fn render_report(&self, results: &AnalysisResults) -> Result<String, DartLensError> {
        let summary = results.summary();

        let document = ExportDocument {
            timestamp: Utc::now().to_rfc3339(),
            total_checks: summary.total,
            passed: summary.passed,
            failed: summary.failed,
            warnings: summary.warned,
            results: results.results(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}
