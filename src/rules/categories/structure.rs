//! Project structure checks

use crate::rules::engine::RuleCategory;
use crate::rules::results::{CheckResult, Severity};
use crate::scanner::Scanner;

/// Directories a conventional Flutter project is expected to have.
const REQUIRED_DIRECTORIES: &[&str] = &["lib", "lib/models", "lib/services", "lib/screens"];

pub struct StructureChecks;

impl RuleCategory for StructureChecks {
    fn name(&self) -> &'static str {
        "Structure"
    }

    fn run(&self, scanner: &Scanner) -> Vec<CheckResult> {
        vec![check_project_structure(scanner)]
    }
}

fn check_project_structure(scanner: &Scanner) -> CheckResult {
    let missing: Vec<&str> = REQUIRED_DIRECTORIES
        .iter()
        .copied()
        .filter(|dir| !scanner.directory_exists(dir))
        .collect();

    if missing.is_empty() {
        CheckResult::pass(
            "Structure",
            "Project Structure",
            "Required directories present",
        )
    } else {
        CheckResult::warn(
            "Structure",
            "Project Structure",
            format!("Missing directories: {}", missing.join(", ")),
        )
        .with_severity(Severity::Low)
    }
}
