// crates/eval-sweep-core/src/config.rs
// ============================================================================
// Module: Harness Configuration
// Description: TOML-backed configuration for engine and filesystem layout.
// Purpose: Resolve where suites live, where artifacts go, and how the
//          engine is spawned, with fail-closed input handling.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! The harness runs with built-in defaults matching the original layout
//! (`./test_suites`, `./data`, `cargo run --release --`). A TOML file can
//! override any field. Loading is strict: bounded size, UTF-8 only, and
//! unknown keys rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::plan::SweepLayout;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default config filename probed when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "eval-sweep.toml";
/// Maximum accepted config file size in bytes.
const MAX_CONFIG_BYTES: u64 = 64 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures while loading a harness configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The explicitly requested config file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The config file exceeds the size limit.
    #[error("config file exceeds size limit of {MAX_CONFIG_BYTES} bytes")]
    TooLarge,
    /// The config file is not valid UTF-8.
    #[error("config file must be utf-8")]
    NotUtf8,
    /// The config file is not valid TOML for this schema.
    #[error("invalid config file '{path}': {message}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default engine program.
fn default_engine_program() -> String {
    "cargo".to_string()
}

/// Default fixed engine arguments (release build of the engine crate).
fn default_engine_args() -> Vec<String> {
    vec!["run".to_string(), "--release".to_string(), "--".to_string()]
}

/// Default suites root directory.
fn default_suites_root() -> PathBuf {
    PathBuf::from("./test_suites")
}

/// Default output artifact directory.
fn default_output_dir() -> PathBuf {
    PathBuf::from("./data")
}

/// Harness configuration, all fields defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct HarnessConfig {
    /// Program spawned for each invocation unit.
    #[serde(default = "default_engine_program")]
    pub engine_program: String,
    /// Fixed arguments preceding the per-unit engine flags.
    #[serde(default = "default_engine_args")]
    pub engine_args: Vec<String>,
    /// Root directory holding performance suite files.
    #[serde(default = "default_suites_root")]
    pub suites_root: PathBuf,
    /// Flat directory receiving one output artifact per unit.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Toolchain directory prefixed onto the child `PATH`.
    ///
    /// When unset, `<HOME>/.cargo/bin` is derived at environment
    /// construction time.
    #[serde(default)]
    pub toolchain_path: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            engine_program: default_engine_program(),
            engine_args: default_engine_args(),
            suites_root: default_suites_root(),
            output_dir: default_output_dir(),
            toolchain_path: None,
        }
    }
}

impl HarnessConfig {
    /// Loads the configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// [`DEFAULT_CONFIG_PATH`] is probed and built-in defaults apply when
    /// it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the
    /// size limit, is not UTF-8, or does not match the schema.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(explicit) => Self::load_file(explicit),
            None => {
                let probed = Path::new(DEFAULT_CONFIG_PATH);
                if probed.is_file() {
                    Self::load_file(probed)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads and parses one config file with fail-closed guards.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if metadata.len() > MAX_CONFIG_BYTES {
            return Err(ConfigError::TooLarge);
        }
        let bytes = fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let byte_len = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        if byte_len > MAX_CONFIG_BYTES {
            return Err(ConfigError::TooLarge);
        }
        let content = String::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8)?;
        toml::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Lowers the configuration into the layout the planner consumes.
    #[must_use]
    pub fn layout(&self) -> SweepLayout {
        SweepLayout {
            engine_program: self.engine_program.clone(),
            engine_args: self.engine_args.clone(),
            suites_root: self.suites_root.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}
