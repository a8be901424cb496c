//! Terminal output formatting with colors

use colored::Colorize;

use super::ReportRenderer;
use crate::error::DartLensError;
use crate::rules::results::{AnalysisResults, CheckResult, CheckStatus};

/// At most this many affected files are printed per result in verbose mode;
/// the rest collapse into a "... and N more" line.
const VERBOSE_FILES_SHOWN: usize = 3;

const RULE_WIDTH: usize = 70;

pub struct TerminalOutput {
    verbose: bool,
}

impl TerminalOutput {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_result(&self, result: &CheckResult) -> String {
        let glyph = match result.status {
            CheckStatus::Pass => "✓".green(),
            CheckStatus::Fail => "✗".red(),
            CheckStatus::Warn => "⚠".yellow(),
        };

        let mut output = format!("  {} {}: {}\n", glyph, result.check_name, result.message);

        if self.verbose {
            if let Some(files) = &result.files_affected {
                for file in files.iter().take(VERBOSE_FILES_SHOWN) {
                    output.push_str(&format!("      - {}\n", file.dimmed()));
                }
                if files.len() > VERBOSE_FILES_SHOWN {
                    output.push_str(&format!(
                        "      ... and {} more\n",
                        files.len() - VERBOSE_FILES_SHOWN
                    ));
                }
            }
        }

        output
    }

    fn format_categories(&self, results: &AnalysisResults) -> String {
        let mut output = String::new();

        for (category, category_results) in results.by_category() {
            output.push_str(&format!(
                "\n📋 {}\n{}\n",
                category.bold(),
                "-".repeat(RULE_WIDTH).dimmed()
            ));

            for result in category_results {
                output.push_str(&self.format_result(result));
            }
        }

        output
    }

    fn format_summary(&self, results: &AnalysisResults) -> String {
        let summary = results.summary();

        format!(
            "\n{rule}\n{title}\n{rule}\n  Total Checks:    {}\n  {} Passed:        {}\n  {} Failed:        {}\n  {} Warnings:      {}\n  Pass Rate:       {:.1}%\n{rule}\n",
            summary.total,
            "✓".green(),
            summary.passed,
            "✗".red(),
            summary.failed,
            "⚠".yellow(),
            summary.warned,
            summary.pass_rate(),
            rule = "=".repeat(RULE_WIDTH),
            title = "SUMMARY".bold(),
        )
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, results: &AnalysisResults) -> Result<String, DartLensError> {
        let mut output = format!(
            "\n{rule}\n{title}\n{rule}\n",
            rule = "=".repeat(RULE_WIDTH),
            title = "CODE ANALYSIS RESULTS".bold(),
        );

        output.push_str(&self.format_categories(results));
        output.push_str(&self.format_summary(results));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::results::Severity;

    fn create_test_results() -> AnalysisResults {
        let mut results = AnalysisResults::new();
        results.add_result(
            CheckResult::fail("Security", "Hardcoded Secrets", "Found secrets in 5 file(s)")
                .with_severity(Severity::Critical)
                .with_files(
                    (0..5)
                        .map(|i| format!("lib/file{}.dart", i))
                        .collect::<Vec<_>>(),
                ),
        );
        results.add_result(CheckResult::pass(
            "Testing",
            "Test Coverage",
            "Found 3 test file(s)",
        ));
        results.add_result(CheckResult::warn(
            "Code Quality",
            "Code Style",
            "Code style issues in 2 file(s)",
        ));
        results
    }

    #[test]
    fn test_report_contains_categories_and_messages() {
        let output = TerminalOutput::new(false);
        let rendered = output.render_report(&create_test_results()).unwrap();

        assert!(rendered.contains("CODE ANALYSIS RESULTS"));
        assert!(rendered.contains("Security"));
        assert!(rendered.contains("Hardcoded Secrets: Found secrets in 5 file(s)"));
        assert!(rendered.contains("Test Coverage"));
        assert!(rendered.contains("SUMMARY"));
    }

    #[test]
    fn test_categories_render_in_lexicographic_order() {
        let output = TerminalOutput::new(false);
        let rendered = output.render_report(&create_test_results()).unwrap();

        let quality = rendered.find("Code Quality").unwrap();
        let security = rendered.find("Security").unwrap();
        let testing = rendered.find("Testing").unwrap();
        assert!(quality < security);
        assert!(security < testing);
    }

    #[test]
    fn test_verbose_lists_at_most_three_files() {
        let output = TerminalOutput::new(true);
        let rendered = output.render_report(&create_test_results()).unwrap();

        assert!(rendered.contains("lib/file0.dart"));
        assert!(rendered.contains("lib/file2.dart"));
        assert!(!rendered.contains("lib/file3.dart"));
        assert!(rendered.contains("... and 2 more"));
    }

    #[test]
    fn test_non_verbose_hides_file_lists() {
        let output = TerminalOutput::new(false);
        let rendered = output.render_report(&create_test_results()).unwrap();

        assert!(!rendered.contains("lib/file0.dart"));
    }

    #[test]
    fn test_summary_figures() {
        let output = TerminalOutput::new(false);
        let rendered = output.render_report(&create_test_results()).unwrap();

        assert!(rendered.contains("Total Checks:    3"));
        assert!(rendered.contains("Passed:        1"));
        assert!(rendered.contains("Failed:        1"));
        assert!(rendered.contains("Warnings:      1"));
        assert!(rendered.contains("Pass Rate:       33.3%"));
    }

    #[test]
    fn test_empty_results_render() {
        let output = TerminalOutput::new(false);
        let rendered = output.render_report(&AnalysisResults::new()).unwrap();

        assert!(rendered.contains("Total Checks:    0"));
        assert!(rendered.contains("Pass Rate:       0.0%"));
    }
}
