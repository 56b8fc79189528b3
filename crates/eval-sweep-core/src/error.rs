// crates/eval-sweep-core/src/error.rs
// ============================================================================
// Module: Sweep Errors
// Description: Typed failures raised while planning a sweep.
// Purpose: Distinguish the fail-fast planning errors from per-unit engine
//          failures, which are recorded rather than raised.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Only planning can fail a sweep: an unsupported mode or an unknown column
//! aborts before any engine process is spawned. Engine failures are carried
//! in [`crate::driver::UnitOutcome`] instead and never escalate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::mode::Mode;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures that abort a sweep before any invocation is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SweepError {
    /// The requested mode is not a recognized execution mode.
    #[error("unsupported mode '{0}' (expected 'perf', 'query', or 'attack')")]
    UnsupportedMode(String),
    /// The column selector names a column outside the mode's catalog.
    #[error("unknown column '{column}' for mode '{mode}'")]
    UnknownColumn {
        /// Mode whose catalog was consulted.
        mode: Mode,
        /// The selector value that failed catalog validation.
        column: String,
    },
}
