//! Test coverage checks

use crate::rules::engine::RuleCategory;
use crate::rules::results::{CheckResult, Severity};
use crate::scanner::Scanner;

pub struct TestingChecks;

impl RuleCategory for TestingChecks {
    fn name(&self) -> &'static str {
        "Testing"
    }

    fn run(&self, scanner: &Scanner) -> Vec<CheckResult> {
        vec![check_test_coverage(scanner)]
    }
}

/// Count `*_test.dart` files under `test/`. Presence, not coverage in the
/// instrumented sense; the naming convention is the whole signal.
fn check_test_coverage(scanner: &Scanner) -> CheckResult {
    let test_files = scanner.files_with_suffix("test", "_test.dart");

    if test_files.is_empty() {
        CheckResult::warn("Testing", "Test Coverage", "No test files found")
            .with_severity(Severity::Medium)
    } else {
        CheckResult::pass(
            "Testing",
            "Test Coverage",
            format!("Found {} test file(s)", test_files.len()),
        )
    }
}
