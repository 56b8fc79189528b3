// crates/eval-sweep-core/src/request.rs
// ============================================================================
// Module: Sweep Requests
// Description: The immutable parameter set for one harness invocation.
// Purpose: Capture mode, repetition count, sample size, verbosity, and the
//          column selector with positivity enforced at construction.
// Dependencies: none
// ============================================================================

//! ## Overview
//! A [`SweepRequest`] is built once from caller input and never mutated.
//! Round count and sample size are non-zero by construction; the verbosity
//! string is passed through to the engine verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::NonZeroU32;

use crate::mode::Mode;

// ============================================================================
// SECTION: Selector
// ============================================================================

/// CLI sentinel selecting every column in the mode's catalog.
pub const ALL_COLUMNS: &str = "all";

/// Column selection for a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Sweep every column in the mode's catalog, in catalog order.
    All,
    /// Sweep exactly one named column.
    Column(String),
}

impl ColumnSelector {
    /// Builds a selector from the CLI `--name` value.
    ///
    /// The literal [`ALL_COLUMNS`] maps to [`Self::All`]; anything else is
    /// a single-column selection validated against the catalog at planning
    /// time.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == ALL_COLUMNS {
            Self::All
        } else {
            Self::Column(name.to_string())
        }
    }
}

// ============================================================================
// SECTION: Request
// ============================================================================

/// The immutable parameters of one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRequest {
    /// Execution mode selecting the catalog and suite subdirectory.
    pub mode: Mode,
    /// Repetition count forwarded to the engine's `-r` flag.
    pub rounds: NonZeroU32,
    /// Sample size forwarded to the engine's `-s` flag.
    pub size: NonZeroU32,
    /// Verbosity string forwarded to the engine via `RUST_LOG`.
    pub log_level: String,
    /// Column selection for this sweep.
    pub selector: ColumnSelector,
}

impl SweepRequest {
    /// Creates a request from raw counts.
    ///
    /// Returns `None` when `rounds` or `size` is zero.
    #[must_use]
    pub fn new(
        mode: Mode,
        rounds: u32,
        size: u32,
        log_level: impl Into<String>,
        selector: ColumnSelector,
    ) -> Option<Self> {
        Some(Self {
            mode,
            rounds: NonZeroU32::new(rounds)?,
            size: NonZeroU32::new(size)?,
            log_level: log_level.into(),
            selector,
        })
    }
}
