//! Dependency manifest checks

use crate::rules::engine::RuleCategory;
use crate::rules::results::CheckResult;
use crate::scanner::Scanner;

/// Package-name substrings expected in the manifest, with the message shown
/// when one is absent.
const ESSENTIAL_PACKAGES: &[(&str, &str)] = &[
    ("provider", "Missing state management (provider)"),
    ("flutter_lints", "Missing flutter_lints"),
];

pub struct DependencyChecks;

impl RuleCategory for DependencyChecks {
    fn name(&self) -> &'static str {
        "Dependencies"
    }

    fn run(&self, scanner: &Scanner) -> Vec<CheckResult> {
        vec![check_pubspec(scanner)]
    }
}

/// Verify `pubspec.yaml` exists and mentions the essential packages.
///
/// This is the only check where a missing artifact is fatal: a Flutter
/// project without a manifest cannot build at all.
fn check_pubspec(scanner: &Scanner) -> CheckResult {
    if !scanner.file_exists("pubspec.yaml") {
        return CheckResult::fail(
            "Dependencies",
            "Pubspec Configuration",
            "pubspec.yaml not found",
        );
    }

    // Raw substring scan, no YAML parsing: a package mentioned anywhere in
    // the manifest counts.
    let content = scanner.read_file(&scanner.root().join("pubspec.yaml"));

    let issues: Vec<&str> = ESSENTIAL_PACKAGES
        .iter()
        .filter(|(package, _)| !content.contains(package))
        .map(|(_, message)| *message)
        .collect();

    if issues.is_empty() {
        CheckResult::pass(
            "Dependencies",
            "Essential Packages",
            "Essential packages configured",
        )
    } else {
        CheckResult::warn(
            "Dependencies",
            "Essential Packages",
            format!("Potential issues: {}", issues.join(", ")),
        )
    }
}
