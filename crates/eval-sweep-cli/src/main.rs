// crates/eval-sweep-cli/src/main.rs
// ============================================================================
// Module: Eval Sweep CLI Entry Point
// Description: Command-line front end for engine evaluation sweeps.
// Purpose: Parse sweep parameters, resolve the harness configuration, and
//          drive the engine once per selected column.
// Dependencies: clap, eval-sweep-core, thiserror
// ============================================================================

//! ## Overview
//! The `eval-sweep` binary expands one `(mode, column, rounds, size)`
//! request into sequential engine invocations. Engine processes inherit the
//! harness's standard streams; the harness itself emits only a final
//! summary line and its own argument/config errors. Individual engine
//! failures never change the harness exit status.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitCode;

use clap::Parser;
use clap::ValueEnum;
use eval_sweep_core::ColumnSelector;
use eval_sweep_core::EngineExit;
use eval_sweep_core::EngineInvoker;
use eval_sweep_core::ExecutionEnv;
use eval_sweep_core::HarnessConfig;
use eval_sweep_core::InvocationUnit;
use eval_sweep_core::Mode;
use eval_sweep_core::SweepRequest;
use eval_sweep_core::run_sweep;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "eval-sweep", version, about = "Sweep an evaluation engine across test suites")]
struct Cli {
    /// Repetition count forwarded to the engine.
    #[arg(short = 'r', long = "round", value_name = "COUNT", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    round: u32,
    /// Sample size forwarded to the engine.
    #[arg(short = 's', long = "size", value_name = "SIZE", default_value_t = 100,
          value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,
    /// Engine log verbosity, forwarded via `RUST_LOG`.
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Column to sweep, or `all` for the full catalog.
    #[arg(short = 'n', long = "name", value_name = "COLUMN", default_value = "all")]
    name: String,
    /// Execution mode selecting the catalog and suite subdirectory.
    #[arg(short = 't', long = "type", value_enum, value_name = "MODE",
          default_value_t = ModeArg::Perf)]
    mode: ModeArg,
    /// Optional harness config file (defaults to eval-sweep.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Override the configured suites root directory.
    #[arg(long = "suites-root", value_name = "DIR")]
    suites_root: Option<PathBuf>,
    /// Override the configured output artifact directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Override the engine with a prebuilt binary (clears fixed engine args).
    #[arg(long = "engine", value_name = "PROGRAM")]
    engine: Option<String>,
}

/// Execution mode CLI spellings.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum ModeArg {
    /// Performance evaluation (alias: `query`).
    #[value(alias = "query")]
    Perf,
    /// Inference-attack simulation.
    Attack,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Perf => Self::Perf,
            ModeArg::Attack => Self::Attack,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Process Invoker
// ============================================================================

/// Invoker spawning one real engine process per unit.
struct ProcessInvoker;

impl EngineInvoker for ProcessInvoker {
    fn invoke(&mut self, unit: &InvocationUnit, env: &ExecutionEnv) -> io::Result<EngineExit> {
        // Standard streams are inherited; the engine talks to the operator
        // directly.
        let status = Command::new(&unit.program)
            .args(&unit.args)
            .env_clear()
            .envs(env.vars())
            .status()?;
        if status.success() {
            Ok(EngineExit::Success)
        } else {
            Ok(EngineExit::Failure(status.code()))
        }
    }
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses arguments, resolves configuration, and runs the sweep.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    let selector = ColumnSelector::from_name(&cli.name);
    let request = SweepRequest::new(cli.mode.into(), cli.round, cli.size, &cli.log_level, selector)
        .ok_or_else(|| CliError::new("round and size must be at least 1".to_string()))?;

    let mut config = HarnessConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    apply_overrides(&mut config, &cli);

    let env =
        ExecutionEnv::new(std::env::vars(), &request.log_level, config.toolchain_path.as_ref());

    let report = run_sweep(&request, &config.layout(), &env, &mut ProcessInvoker)
        .map_err(|err| CliError::new(err.to_string()))?;

    // Per-unit engine failures never reach the harness exit status.
    write_stdout_line(&format!("sweep complete: {} unit(s) executed", report.len()))
        .map_err(|err| CliError::new(format!("failed to write to stdout: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Applies CLI overrides onto the loaded configuration.
fn apply_overrides(config: &mut HarnessConfig, cli: &Cli) {
    if let Some(root) = &cli.suites_root {
        config.suites_root.clone_from(root);
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir.clone_from(dir);
    }
    if let Some(engine) = &cli.engine {
        config.engine_program.clone_from(engine);
        config.engine_args.clear();
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> io::Result<()> {
    let mut stderr = io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
