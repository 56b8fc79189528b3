// crates/eval-sweep-core/src/env.rs
// ============================================================================
// Module: Execution Environment
// Description: Child-process environment construction for engine runs.
// Purpose: Copy the caller's environment and overlay the engine verbosity
//          variable and the toolchain search-path prefix.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The [`ExecutionEnv`] is built once per sweep from an injected snapshot of
//! the caller's environment and reused unmodified for every invocation
//! unit. Exactly two variables are overlaid: `RUST_LOG` carries the
//! requested verbosity, and `PATH` is prefixed with the toolchain directory
//! that can run the engine.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::path::PathBuf;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Variable carrying engine log verbosity.
pub const LOG_LEVEL_VAR: &str = "RUST_LOG";
/// Executable search-path variable.
pub const PATH_VAR: &str = "PATH";
/// Variable used to derive the default toolchain directory.
pub const HOME_VAR: &str = "HOME";
/// Toolchain directory relative to the caller's home.
const DEFAULT_TOOLCHAIN_SUFFIX: &str = ".cargo/bin";
/// Unix search-path separator.
const PATH_SEPARATOR: char = ':';

// ============================================================================
// SECTION: Execution Environment
// ============================================================================

/// Complete child-process environment for every unit of one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionEnv {
    /// Full variable map, base snapshot plus the two overlays.
    vars: BTreeMap<String, String>,
}

impl ExecutionEnv {
    /// Builds the environment from a base snapshot and the two overlays.
    ///
    /// `toolchain_dir` falls back to `<HOME>/.cargo/bin` when unset; if
    /// neither is available the `PATH` overlay is skipped. A missing base
    /// `PATH` becomes the bare toolchain directory.
    #[must_use]
    pub fn new<I>(base: I, log_level: &str, toolchain_dir: Option<&PathBuf>) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars: BTreeMap<String, String> = base.into_iter().collect();

        let toolchain = toolchain_dir.cloned().or_else(|| {
            vars.get(HOME_VAR).map(|home| PathBuf::from(home).join(DEFAULT_TOOLCHAIN_SUFFIX))
        });
        if let Some(dir) = toolchain {
            let prefix = dir.to_string_lossy().into_owned();
            let path = match vars.get(PATH_VAR) {
                Some(existing) => format!("{prefix}{PATH_SEPARATOR}{existing}"),
                None => prefix,
            };
            vars.insert(PATH_VAR.to_string(), path);
        }

        vars.insert(LOG_LEVEL_VAR.to_string(), log_level.to_string());
        Self {
            vars,
        }
    }

    /// Returns the complete variable map, sorted by name.
    #[must_use]
    pub const fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Looks up a single variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}
