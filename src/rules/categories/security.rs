//! Security checks
//!
//! Four checks: hardcoded secrets, SQL concatenation, plain-HTTP URLs, and
//! presence of input-validation patterns. All operate on text; none parse
//! Dart.

use crate::rules::engine::RuleCategory;
use crate::rules::patterns::{
    strip_line_comments, INSECURE_HTTP, SECRET_PATTERNS, SQL_CONCAT, VALIDATION_PATTERNS,
};
use crate::rules::results::{CheckResult, Severity};
use crate::scanner::Scanner;

pub struct SecurityChecks;

impl RuleCategory for SecurityChecks {
    fn name(&self) -> &'static str {
        "Security"
    }

    fn run(&self, scanner: &Scanner) -> Vec<CheckResult> {
        vec![
            check_hardcoded_secrets(scanner),
            check_sql_injection(scanner),
            check_insecure_connections(scanner),
            check_input_validation(scanner),
        ]
    }
}

/// Look for quoted-literal assignments to secret-like names.
///
/// Comments are stripped first so commented-out examples don't flag. A file
/// where the same keyword appears in a const/final binding is exempt for
/// that keyword.
fn check_hardcoded_secrets(scanner: &Scanner) -> CheckResult {
    let mut files_with_issues = Vec::new();

    for dart_file in scanner.dart_files() {
        let content = strip_line_comments(&scanner.read_file(&dart_file));

        let flagged = SECRET_PATTERNS
            .iter()
            .any(|p| p.regex.is_match(&content) && !p.suppression.is_match(&content));

        if flagged {
            files_with_issues.push(scanner.relative_path(&dart_file));
        }
    }

    if files_with_issues.is_empty() {
        CheckResult::pass(
            "Security",
            "Hardcoded Secrets",
            "No obvious hardcoded secrets detected",
        )
    } else {
        CheckResult::fail(
            "Security",
            "Hardcoded Secrets",
            format!(
                "Found potential hardcoded secrets in {} file(s)",
                files_with_issues.len()
            ),
        )
        .with_files(files_with_issues)
        .with_severity(Severity::Critical)
    }
}

/// Look for query-execution calls built via string concatenation.
///
/// A `?` anywhere in the raw file is taken as a sign of parameterized
/// queries and exempts the whole file. Crude, but cheap to evaluate and
/// stable; kept as-is on purpose.
fn check_sql_injection(scanner: &Scanner) -> CheckResult {
    let mut files_with_issues = Vec::new();

    for dart_file in scanner.dart_files() {
        let content = scanner.read_file(&dart_file);
        let content_no_comments = strip_line_comments(&content);

        if SQL_CONCAT.is_match(&content_no_comments) && !content.contains('?') {
            files_with_issues.push(scanner.relative_path(&dart_file));
        }
    }

    if files_with_issues.is_empty() {
        CheckResult::pass(
            "Security",
            "SQL Injection Prevention",
            "No obvious SQL concatenation detected",
        )
    } else {
        CheckResult::warn(
            "Security",
            "SQL Injection",
            format!(
                "Potential SQL concatenation in {} file(s)",
                files_with_issues.len()
            ),
        )
        .with_files(files_with_issues)
        .with_severity(Severity::High)
    }
}

/// Look for quoted `http://` literals. Comments are deliberately not
/// stripped: a commented-out insecure URL is still worth flagging.
fn check_insecure_connections(scanner: &Scanner) -> CheckResult {
    let mut files_with_issues = Vec::new();

    for dart_file in scanner.dart_files() {
        let content = scanner.read_file(&dart_file);

        if INSECURE_HTTP.is_match(&content) {
            files_with_issues.push(scanner.relative_path(&dart_file));
        }
    }

    if files_with_issues.is_empty() {
        CheckResult::pass(
            "Security",
            "Secure Connections",
            "No insecure HTTP connections detected",
        )
    } else {
        CheckResult::warn(
            "Security",
            "Insecure Connections",
            format!(
                "Found insecure HTTP connections in {} file(s)",
                files_with_issues.len()
            ),
        )
        .with_files(files_with_issues)
        .with_severity(Severity::High)
    }
}

/// Assert the *presence* of validation-related tokens somewhere in the
/// tree, not their correctness.
fn check_input_validation(scanner: &Scanner) -> CheckResult {
    let mut files_with_validation = Vec::new();

    for dart_file in scanner.dart_files() {
        let content = scanner.read_file(&dart_file);

        if VALIDATION_PATTERNS.iter().any(|p| p.is_match(&content)) {
            files_with_validation.push(scanner.relative_path(&dart_file));
        }
    }

    if files_with_validation.is_empty() {
        CheckResult::warn(
            "Security",
            "Input Validation",
            "No obvious input validation patterns detected",
        )
        .with_severity(Severity::Medium)
    } else {
        CheckResult::pass(
            "Security",
            "Input Validation",
            format!(
                "Input validation patterns found in {} file(s)",
                files_with_validation.len()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::results::CheckStatus;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_lib_file(root: &Path, name: &str, content: &str) {
        let path = root.join("lib").join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_secrets_bare_assignment_fails() {
        let temp_dir = TempDir::new().unwrap();
        write_lib_file(
            temp_dir.path(),
            "config.dart",
            r#"var apiKey = "abc123def456";"#,
        );

        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        let result = check_hardcoded_secrets(&scanner);

        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.files_affected.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_secrets_final_declaration_is_suppressed() {
        let temp_dir = TempDir::new().unwrap();
        write_lib_file(
            temp_dir.path(),
            "config.dart",
            r#"final apiKey = "abc123def456";"#,
        );

        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        let result = check_hardcoded_secrets(&scanner);

        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.files_affected.is_none());
    }

    #[test]
    fn test_secrets_in_comments_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        write_lib_file(
            temp_dir.path(),
            "config.dart",
            "// password = \"hunter2\"\nvar x = 1;\n",
        );

        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        let result = check_hardcoded_secrets(&scanner);

        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn test_sql_concatenation_warns() {
        let temp_dir = TempDir::new().unwrap();
        write_lib_file(
            temp_dir.path(),
            "db.dart",
            r#"db.rawQuery("SELECT * FROM users WHERE id = " + id);"#,
        );

        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        let result = check_sql_injection(&scanner);

        assert_eq!(result.status, CheckStatus::Warn);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.check_name, "SQL Injection");
    }

    #[test]
    fn test_sql_placeholder_suppresses_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        write_lib_file(
            temp_dir.path(),
            "db.dart",
            "db.rawQuery(\"SELECT * FROM users WHERE id = \" + id);\ndb.rawQuery(\"SELECT * FROM t WHERE id = ?\", [id]);\n",
        );

        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        let result = check_sql_injection(&scanner);

        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.check_name, "SQL Injection Prevention");
    }

    #[test]
    fn test_insecure_http_warns_even_in_comments() {
        let temp_dir = TempDir::new().unwrap();
        write_lib_file(
            temp_dir.path(),
            "client.dart",
            "// var url = \"http://legacy.example.com\";\n",
        );

        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        let result = check_insecure_connections(&scanner);

        assert_eq!(result.status, CheckStatus::Warn);
        assert_eq!(result.check_name, "Insecure Connections");
    }

    #[test]
    fn test_https_passes() {
        let temp_dir = TempDir::new().unwrap();
        write_lib_file(
            temp_dir.path(),
            "client.dart",
            r#"var url = "https://example.com";"#,
        );

        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        let result = check_insecure_connections(&scanner);

        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.check_name, "Secure Connections");
    }

    #[test]
    fn test_input_validation_presence_passes() {
        let temp_dir = TempDir::new().unwrap();
        write_lib_file(
            temp_dir.path(),
            "form.dart",
            "if (!email.isValid) { return; }\n",
        );

        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        let result = check_input_validation(&scanner);

        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.message.contains("1 file(s)"));
    }

    #[test]
    fn test_input_validation_absence_warns() {
        let temp_dir = TempDir::new().unwrap();
        write_lib_file(temp_dir.path(), "main.dart", "void main() {}\n");

        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        let result = check_input_validation(&scanner);

        assert_eq!(result.status, CheckStatus::Warn);
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn test_category_emits_one_result_per_check() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = Scanner::new(temp_dir.path().to_path_buf());

        let results = SecurityChecks.run(&scanner);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.category == "Security"));
    }
}
