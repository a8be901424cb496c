//! Check evaluation engine
//!
//! Runs the fixed, ordered sequence of check categories against a scanner
//! and aggregates their results. The order is part of the observable
//! contract: security, then code quality, then structure, testing, and
//! dependencies.

use tracing::{debug, info, span, Level};

use super::categories::{
    dependencies::DependencyChecks, quality::QualityChecks, security::SecurityChecks,
    structure::StructureChecks, testing::TestingChecks,
};
use super::results::AnalysisResults;
use crate::scanner::Scanner;

/// Trait for check categories.
///
/// A category owns one or more checks; each check contributes exactly one
/// result per run. Categories never fail: all I/O inside a check is
/// fail-soft, so a crashing analysis is not a possible outcome.
pub trait RuleCategory {
    /// Get the display name of the category.
    fn name(&self) -> &'static str;

    /// Run the checks in this category, one result per check.
    fn run(&self, scanner: &Scanner) -> Vec<super::CheckResult>;
}

/// Main analysis engine.
#[derive(Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run every category in the fixed order and collect the results.
    pub fn run(&self, scanner: &Scanner) -> AnalysisResults {
        info!(root = %scanner.root().display(), "Starting static analysis");

        let mut results = AnalysisResults::new();

        let categories: Vec<Box<dyn RuleCategory>> = vec![
            Box::new(SecurityChecks),
            Box::new(QualityChecks),
            Box::new(StructureChecks),
            Box::new(TestingChecks),
            Box::new(DependencyChecks),
        ];

        for category in categories {
            let category_name = category.name();
            let span = span!(Level::INFO, "category", category = category_name);
            let _guard = span.enter();

            debug!(category = category_name, "Running category");
            let category_results = category.run(scanner);
            debug!(
                category = category_name,
                checks = category_results.len(),
                "Category completed"
            );

            results.add_results(category_results);
        }

        let summary = results.summary();
        info!(
            "Analysis complete: {} passed, {} failed, {} warnings",
            summary.passed, summary.failed, summary.warned,
        );

        results
    }
}
