//! Rules module - Check catalog and evaluation engine

pub mod categories;
pub mod engine;
pub mod patterns;
pub mod results;

pub use engine::AnalysisEngine;
pub use results::{AnalysisResults, CheckResult, CheckStatus, Severity};
