//! Exit codes for the CLI
//!
//! The 0/1 distinction is the CI gating contract: automation keys off it to
//! decide whether a build may proceed.
//!
//! | Code | Constant | Meaning |
//! |------|----------|---------|
//! | 0 | `SUCCESS` | All checks completed without a failure |
//! | 1 | `CHECKS_FAILED` | One or more checks failed |
//! | 2 | `ERROR` | Runtime error (e.g., export path unwritable) |

/// All checks completed and none failed. Warnings do not affect the exit
/// code.
pub const SUCCESS: i32 = 0;

/// One or more checks failed. The full report is still printed before
/// exiting.
pub const CHECKS_FAILED: i32 = 1;

/// Runtime error outside the checks themselves (the checks are fail-soft
/// and cannot abort a run).
pub const ERROR: i32 = 2;
