// crates/eval-sweep-core/src/mode.rs
// ============================================================================
// Module: Execution Modes
// Description: The closed set of sweep execution modes and their wire forms.
// Purpose: Map each mode to its engine token, suite prefix, and suite
//          subdirectory.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A sweep runs in exactly one [`Mode`]. The mode selects which column
//! catalog applies, which prefix suite files carry, and whether suites are
//! read from the `other/` subdirectory reserved for non-performance suites.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::SweepError;

// ============================================================================
// SECTION: Mode
// ============================================================================

/// Subdirectory under the suites root holding non-performance suites.
pub const OTHER_SUITE_SUBDIR: &str = "other";

/// Execution mode of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Performance evaluation of query workloads.
    Perf,
    /// Inference-attack simulation against encrypted columns.
    Attack,
}

impl Mode {
    /// Parses a mode from its CLI spelling.
    ///
    /// Accepts `perf` and its historical alias `query` for performance
    /// mode, and `attack` for attack mode.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::UnsupportedMode`] for any other spelling. This
    /// is the only hard-stop error of a sweep and fires before any engine
    /// process is spawned.
    pub fn parse(raw: &str) -> Result<Self, SweepError> {
        match raw {
            "perf" | "query" => Ok(Self::Perf),
            "attack" => Ok(Self::Attack),
            other => Err(SweepError::UnsupportedMode(other.to_string())),
        }
    }

    /// Returns the token passed to the engine's `-e` flag.
    #[must_use]
    pub const fn engine_token(self) -> &'static str {
        match self {
            Self::Perf => "perf",
            Self::Attack => "attack",
        }
    }

    /// Returns the prefix of suite base filenames for this mode.
    #[must_use]
    pub const fn suite_prefix(self) -> &'static str {
        match self {
            Self::Perf => "query",
            Self::Attack => "attack",
        }
    }

    /// Returns the suite subdirectory for this mode, if any.
    ///
    /// Performance suites live directly under the suites root; attack
    /// suites live under [`OTHER_SUITE_SUBDIR`].
    #[must_use]
    pub const fn suite_subdir(self) -> Option<&'static str> {
        match self {
            Self::Perf => None,
            Self::Attack => Some(OTHER_SUITE_SUBDIR),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.engine_token())
    }
}
