//! Code quality checks

use crate::rules::engine::RuleCategory;
use crate::rules::patterns::{strip_line_comments, DEBUG_PATTERNS, STYLE_PATTERNS};
use crate::rules::results::CheckResult;
use crate::scanner::Scanner;

/// Affected-file lists for the style check are capped at this many entries;
/// the full count stays in the message.
const STYLE_FILES_LIMIT: usize = 5;

/// Debug print counts above this warn; at or below they pass.
const DEBUG_STATEMENT_THRESHOLD: usize = 10;

pub struct QualityChecks;

impl RuleCategory for QualityChecks {
    fn name(&self) -> &'static str {
        "Code Quality"
    }

    fn run(&self, scanner: &Scanner) -> Vec<CheckResult> {
        vec![check_debug_statements(scanner), check_code_style(scanner)]
    }
}

/// Count debug print calls across all source files.
///
/// The policy is non-monotonic by design: zero passes, a handful passes
/// (normal during active development), only "many" warns.
fn check_debug_statements(scanner: &Scanner) -> CheckResult {
    let mut files_with_debug = Vec::new();
    let mut debug_count = 0;

    for dart_file in scanner.dart_files() {
        let content = strip_line_comments(&scanner.read_file(&dart_file));

        let matches: usize = DEBUG_PATTERNS
            .iter()
            .map(|p| p.find_iter(&content).count())
            .sum();

        if matches > 0 {
            files_with_debug.push(scanner.relative_path(&dart_file));
            debug_count += matches;
        }
    }

    if debug_count > DEBUG_STATEMENT_THRESHOLD {
        CheckResult::warn(
            "Code Quality",
            "Debug Statements",
            format!(
                "Found {} debug print statements in {} file(s)",
                debug_count,
                files_with_debug.len()
            ),
        )
        .with_files(files_with_debug)
    } else if debug_count > 0 {
        CheckResult::pass(
            "Code Quality",
            "Debug Statements",
            format!(
                "Found {} debug statements (acceptable for development)",
                debug_count
            ),
        )
    } else {
        CheckResult::pass(
            "Code Quality",
            "Debug Statements",
            "No debug print statements found",
        )
    }
}

/// Flag files with crude style smells: long space runs, padded assignment
/// operators, consecutive bare-semicolon lines.
fn check_code_style(scanner: &Scanner) -> CheckResult {
    let mut files_with_issues = Vec::new();

    for dart_file in scanner.dart_files() {
        let content = scanner.read_file(&dart_file);

        if STYLE_PATTERNS.iter().any(|(_, p)| p.is_match(&content)) {
            files_with_issues.push(scanner.relative_path(&dart_file));
        }
    }

    if files_with_issues.is_empty() {
        CheckResult::pass("Code Quality", "Code Style", "Code style looks good")
    } else {
        let total = files_with_issues.len();
        files_with_issues.truncate(STYLE_FILES_LIMIT);
        CheckResult::warn(
            "Code Quality",
            "Code Style",
            format!("Code style issues in {} file(s)", total),
        )
        .with_files(files_with_issues)
    }
}
