//! # Analysis Results Structures
//!
//! This module defines the data structures for representing check results
//! and their aggregation.
//!
//! ## Overview
//!
//! - [`CheckStatus`] - Outcome of a check (Pass, Fail, Warn)
//! - [`Severity`] - Advisory priority on non-passing results
//! - [`CheckResult`] - A single check's finding
//! - [`AnalysisResults`] - Ordered collection of results from one run
//!
//! ## Examples
//!
//! ```rust
//! use dartlens::rules::results::{AnalysisResults, CheckResult, Severity};
//!
//! let mut results = AnalysisResults::new();
//!
//! results.add_result(
//!     CheckResult::fail("Security", "Hardcoded Secrets", "Found secrets in 2 file(s)")
//!         .with_severity(Severity::Critical)
//!         .with_files(vec!["lib/config.dart".into(), "lib/api.dart".into()]),
//! );
//!
//! let summary = results.summary();
//! assert_eq!(summary.failed, 1);
//! assert!(results.has_failures());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of a single check.
///
/// - **Pass** - No issue found.
/// - **Fail** - A confirmed, blocking issue. Any failed check makes the
///   run exit non-zero.
/// - **Warn** - A suspected issue that needs human judgment; does not
///   affect the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
}

/// Severity levels for non-passing results.
///
/// Severity is an advisory priority label, independent of the pass/fail
/// verdict: it ranks findings in the report but never changes the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suggestions for improvement (e.g., missing optional directories).
    Low,
    /// Should be addressed (e.g., missing tests, stray debug prints).
    Medium,
    /// Likely security-relevant (e.g., plain-HTTP URLs, SQL concatenation).
    High,
    /// Must be resolved before release (e.g., hardcoded secrets).
    Critical,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Medium
    }
}

impl Severity {
    #[allow(dead_code)]
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// A single check result.
///
/// Every check produces exactly one `CheckResult` per run, regardless of how
/// many files it examined. The affected-file list is only present on
/// non-passing results.
///
/// # Examples
///
/// ```rust
/// use dartlens::rules::results::{CheckResult, CheckStatus, Severity};
///
/// let result = CheckResult::warn("Security", "Insecure Connections", "Found HTTP URLs")
///     .with_severity(Severity::High)
///     .with_files(vec!["lib/client.dart".into()]);
///
/// assert_eq!(result.status, CheckStatus::Warn);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Display category (e.g., "Security", "Code Quality").
    pub category: String,

    /// Human-readable name of the specific check.
    pub check_name: String,

    /// Outcome of the check.
    pub status: CheckStatus,

    /// Short message describing the finding, usually with counts.
    pub message: String,

    /// Relative paths implicated by the finding. `None` when the check
    /// passed; serialized as `null` in the JSON export.
    pub files_affected: Option<Vec<String>>,

    /// Advisory priority. Only meaningful when the status is not Pass.
    pub severity: Severity,
}

impl CheckResult {
    fn new(
        category: impl Into<String>,
        check_name: impl Into<String>,
        status: CheckStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            check_name: check_name.into(),
            status,
            message: message.into(),
            files_affected: None,
            severity: Severity::default(),
        }
    }

    /// Create a passing result.
    pub fn pass(
        category: impl Into<String>,
        check_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(category, check_name, CheckStatus::Pass, message)
    }

    /// Create a failing result.
    pub fn fail(
        category: impl Into<String>,
        check_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(category, check_name, CheckStatus::Fail, message)
    }

    /// Create a warning result.
    pub fn warn(
        category: impl Into<String>,
        check_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(category, check_name, CheckStatus::Warn, message)
    }

    /// Set the affected files.
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files_affected = Some(files);
        self
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Derived counts over a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warned: usize,
}

impl Summary {
    /// Percentage of passing checks, 0.0 when there are no checks.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Ordered collection of check results from one analysis run.
///
/// The list is append-only for the duration of a run; insertion order is the
/// execution order of the checks. Renderers only read it and may be invoked
/// any number of times against the same final state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResults {
    results: Vec<CheckResult>,
}

impl AnalysisResults {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result, preserving insertion order.
    pub fn add_result(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Append multiple results.
    pub fn add_results(&mut self, results: impl IntoIterator<Item = CheckResult>) {
        self.results.extend(results);
    }

    /// Get all results in execution order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Compute the pass/fail/warn counts. Pure derivation over the current
    /// list; recomputable any number of times.
    pub fn summary(&self) -> Summary {
        let count =
            |status: CheckStatus| self.results.iter().filter(|r| r.status == status).count();
        Summary {
            total: self.results.len(),
            passed: count(CheckStatus::Pass),
            failed: count(CheckStatus::Fail),
            warned: count(CheckStatus::Warn),
        }
    }

    /// Group results by category, categories in lexicographic order and
    /// results in insertion order within each category.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&CheckResult>> {
        let mut grouped: BTreeMap<&str, Vec<&CheckResult>> = BTreeMap::new();
        for result in &self.results {
            grouped
                .entry(result.category.as_str())
                .or_default()
                .push(result);
        }
        grouped
    }

    /// Whether any check failed. This is the sole exit-code verdict.
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.status == CheckStatus::Fail)
    }

    /// Total number of results.
    #[allow(dead_code)]
    pub fn total_count(&self) -> usize {
        self.results.len()
    }
}
