// crates/eval-sweep-core/src/plan.rs
// ============================================================================
// Module: Invocation Planning
// Description: Expansion of a sweep request into ordered invocation units.
// Purpose: Derive suite input paths, artifact output paths, and the engine
//          argument vector for every selected column.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Planning is pure: given the same request and layout, it yields the same
//! units in the same order. The selector is validated against the mode's
//! catalog here, so a typo aborts the sweep before any process is spawned
//! instead of producing an invocation against a missing suite file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use crate::catalog;
use crate::error::SweepError;
use crate::mode::Mode;
use crate::request::ColumnSelector;
use crate::request::SweepRequest;

// ============================================================================
// SECTION: Layout
// ============================================================================

/// Extension of suite definition and output artifact files.
pub const SUITE_EXTENSION: &str = "toml";

/// Filesystem and engine layout a sweep runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepLayout {
    /// Program spawned for each invocation unit.
    pub engine_program: String,
    /// Fixed arguments preceding the per-unit engine flags.
    pub engine_args: Vec<String>,
    /// Root directory holding performance suite files.
    pub suites_root: PathBuf,
    /// Flat directory receiving one output artifact per unit.
    pub output_dir: PathBuf,
}

impl SweepLayout {
    /// Returns the suite base filename `<prefix>_<column>.toml`.
    #[must_use]
    pub fn suite_base(mode: Mode, column: &str) -> String {
        format!("{}_{column}.{SUITE_EXTENSION}", mode.suite_prefix())
    }

    /// Derives the input suite path for `(mode, column)`.
    ///
    /// Performance suites live directly under the suites root; attack
    /// suites live under its `other/` subdirectory. Pure in its arguments.
    #[must_use]
    pub fn input_path(&self, mode: Mode, column: &str) -> PathBuf {
        let base = Self::suite_base(mode, column);
        match mode.suite_subdir() {
            Some(subdir) => self.suites_root.join(subdir).join(base),
            None => self.suites_root.join(base),
        }
    }

    /// Derives the output artifact path for `(mode, column)`.
    ///
    /// Both modes write to the same flat output directory; the mode is
    /// visible only through the prefix baked into the base filename.
    #[must_use]
    pub fn output_path(&self, mode: Mode, column: &str) -> PathBuf {
        self.output_dir.join(Self::suite_base(mode, column))
    }
}

// ============================================================================
// SECTION: Invocation Units
// ============================================================================

/// One fully resolved engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationUnit {
    /// Column this unit evaluates.
    pub column: String,
    /// Suite definition file read by the engine.
    pub input: PathBuf,
    /// Artifact file written by the engine.
    pub output: PathBuf,
    /// Program to spawn.
    pub program: String,
    /// Complete argument vector, one token per flag value.
    pub args: Vec<String>,
}

/// Renders a path as a single command-line token.
fn path_token(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Assembles the engine argument vector for one unit.
fn engine_args(
    layout: &SweepLayout,
    request: &SweepRequest,
    input: &Path,
    output: &Path,
) -> Vec<String> {
    let mut args = layout.engine_args.clone();
    args.push("-e".to_string());
    args.push(request.mode.engine_token().to_string());
    args.push("-r".to_string());
    args.push(request.rounds.to_string());
    args.push("-s".to_string());
    args.push(request.size.to_string());
    args.push("-c".to_string());
    args.push(path_token(input));
    args.push("-o".to_string());
    args.push(path_token(output));
    args
}

/// Expands a request into invocation units, in execution order.
///
/// Selector `All` yields one unit per catalog column, in catalog order; a
/// named column yields exactly one unit and must be a catalog member.
///
/// # Errors
///
/// Returns [`SweepError::UnknownColumn`] when the selector names a column
/// outside the mode's catalog.
pub fn plan_sweep(
    request: &SweepRequest,
    layout: &SweepLayout,
) -> Result<Vec<InvocationUnit>, SweepError> {
    let columns: Vec<&str> = match &request.selector {
        ColumnSelector::All => catalog::columns_for(request.mode).to_vec(),
        ColumnSelector::Column(name) => {
            if !catalog::contains(request.mode, name) {
                return Err(SweepError::UnknownColumn {
                    mode: request.mode,
                    column: name.clone(),
                });
            }
            vec![name.as_str()]
        }
    };

    Ok(columns
        .into_iter()
        .map(|column| {
            let input = layout.input_path(request.mode, column);
            let output = layout.output_path(request.mode, column);
            let args = engine_args(layout, request, &input, &output);
            InvocationUnit {
                column: column.to_string(),
                input,
                output,
                program: layout.engine_program.clone(),
                args,
            }
        })
        .collect())
}
