//! Declarative pattern tables for the checks
//!
//! Every check expresses its matching logic as a static table here rather
//! than inline control flow. The heuristics are intentionally approximate:
//! they trade precision for needing no Dart toolchain, and their exact
//! behavior (including known over- and under-reporting) is part of the
//! tool's contract.

use lazy_static::lazy_static;
use regex::Regex;

/// A pattern for detecting a hardcoded secret assignment.
pub struct SecretPattern {
    /// Human-readable label for the secret kind.
    pub label: &'static str,
    /// Matches a quoted-literal assignment to a secret-like name.
    pub regex: Regex,
    /// Matches a const/final binding of the same keyword. A file matching
    /// this is not flagged for this pattern (false-positive reduction;
    /// constant bindings are assumed to be reviewed configuration).
    pub suppression: Regex,
}

lazy_static! {
    /// Single-line comment stripper (`//` to end of line).
    pub static ref LINE_COMMENT: Regex = Regex::new(r"(?m)//.*$").unwrap();

    /// Secret assignment patterns with their suppression heuristics.
    pub static ref SECRET_PATTERNS: Vec<SecretPattern> = vec![
        SecretPattern {
            label: "API Key",
            regex: Regex::new(r#"(?i)api[_\s]*key\s*=\s*["'][\w]+["']"#).unwrap(),
            suppression: Regex::new(r"(?i)(const|final)[^\n]*api[_\s]*key").unwrap(),
        },
        SecretPattern {
            label: "Password",
            regex: Regex::new(r#"(?i)password\s*=\s*["'][\w]+["']"#).unwrap(),
            suppression: Regex::new(r"(?i)(const|final)[^\n]*password").unwrap(),
        },
        SecretPattern {
            label: "Secret",
            regex: Regex::new(r#"(?i)secret\s*=\s*["'][\w]+["']"#).unwrap(),
            suppression: Regex::new(r"(?i)(const|final)[^\n]*secret").unwrap(),
        },
        SecretPattern {
            label: "Token",
            regex: Regex::new(r#"(?i)token\s*=\s*["'][\w.-]+["']"#).unwrap(),
            suppression: Regex::new(r"(?i)(const|final)[^\n]*token").unwrap(),
        },
    ];

    /// Query-execution call whose string argument looks concatenated.
    /// Files containing a `?` placeholder anywhere are exempt (taken as a
    /// signal of parameterized queries).
    pub static ref SQL_CONCAT: Regex =
        Regex::new(r#"(?i)(query|rawQuery|execute)\s*\(\s*["'].*["+\s*]+.*["']"#).unwrap();

    /// Quoted literal starting with plain `http://` (not `https://`).
    pub static ref INSECURE_HTTP: Regex = Regex::new(r#"["']http://[^s]"#).unwrap();

    /// Tokens whose presence counts as evidence of input validation.
    pub static ref VALIDATION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"validate\s*\(").unwrap(),
        Regex::new(r"validators\.").unwrap(),
        Regex::new(r"isValid").unwrap(),
        Regex::new(r"@required").unwrap(),
        Regex::new(r"required:").unwrap(),
    ];

    /// Debug print calls counted by the debug-statements check.
    pub static ref DEBUG_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"print\(").unwrap(),
        Regex::new(r"debugPrint\(").unwrap(),
    ];

    /// Style smells: long space runs, padded assignments, stray empty
    /// statements on consecutive lines.
    pub static ref STYLE_PATTERNS: Vec<(&'static str, Regex)> = vec![
        ("mixed_indentation", Regex::new(r" {5,}").unwrap()),
        ("spacing", Regex::new(r"[a-z]\s{2,}=").unwrap()),
        ("empty_statements", Regex::new(r";\s*\n\s*;\n").unwrap()),
    ];
}

/// Remove `//` line comments from `content`.
///
/// This is a text-level strip, not a parse: `//` inside string literals is
/// removed too. The checks that use it accept this imprecision.
pub fn strip_line_comments(content: &str) -> String {
    LINE_COMMENT.replace_all(content, "").into_owned()
}
