//! Sweep driver tests for eval-sweep-core.
// crates/eval-sweep-core/tests/driver_unit.rs
// =============================================================================
// Module: Sweep Driver Tests
// Description: Validate ordering, best-effort continuation, and fail-fast
//              planning through a recording invoker.
// Purpose: Ensure driver semantics hold without spawning real processes.
// =============================================================================

use std::io;
use std::path::Path;

use eval_sweep_core::ColumnSelector;
use eval_sweep_core::EngineExit;
use eval_sweep_core::EngineInvoker;
use eval_sweep_core::ExecutionEnv;
use eval_sweep_core::InvocationUnit;
use eval_sweep_core::Mode;
use eval_sweep_core::SweepLayout;
use eval_sweep_core::SweepRequest;
use eval_sweep_core::UnitStatus;
use eval_sweep_core::catalog;
use eval_sweep_core::run_sweep;

type TestResult = Result<(), String>;

/// Scripted reply for one invocation, in order.
enum Reply {
    /// Report the given engine exit.
    Exit(EngineExit),
    /// Fail to start the process.
    Spawn(&'static str),
}

/// Invoker recording every invocation and replaying scripted replies.
struct RecordingInvoker {
    /// Columns invoked, in order.
    columns: Vec<String>,
    /// Environment snapshots observed per invocation.
    envs: Vec<ExecutionEnv>,
    /// Scripted replies; exhausted entries default to success.
    replies: Vec<Reply>,
}

impl RecordingInvoker {
    /// Creates an invoker with the given scripted replies.
    fn new(replies: Vec<Reply>) -> Self {
        Self {
            columns: Vec::new(),
            envs: Vec::new(),
            replies,
        }
    }
}

impl EngineInvoker for RecordingInvoker {
    fn invoke(&mut self, unit: &InvocationUnit, env: &ExecutionEnv) -> io::Result<EngineExit> {
        self.columns.push(unit.column.clone());
        self.envs.push(env.clone());
        if self.replies.is_empty() {
            return Ok(EngineExit::Success);
        }
        match self.replies.remove(0) {
            Reply::Exit(exit) => Ok(exit),
            Reply::Spawn(message) => Err(io::Error::new(io::ErrorKind::NotFound, message)),
        }
    }
}

fn layout() -> SweepLayout {
    SweepLayout {
        engine_program: "engine".to_string(),
        engine_args: Vec::new(),
        suites_root: Path::new("suites").to_path_buf(),
        output_dir: Path::new("data").to_path_buf(),
    }
}

fn request(mode: Mode, selector: ColumnSelector) -> Result<SweepRequest, String> {
    SweepRequest::new(mode, 1, 100, "info", selector)
        .ok_or_else(|| "request construction rejected positive counts".to_string())
}

fn env() -> ExecutionEnv {
    let base = vec![("PATH".to_string(), "/usr/bin".to_string())];
    ExecutionEnv::new(base, "info", Some(&Path::new("/opt/toolchain").to_path_buf()))
}

#[test]
fn units_execute_in_catalog_order() -> TestResult {
    let request = request(Mode::Perf, ColumnSelector::All)?;
    let mut invoker = RecordingInvoker::new(Vec::new());

    let report =
        run_sweep(&request, &layout(), &env(), &mut invoker).map_err(|err| err.to_string())?;

    let expected: Vec<String> =
        catalog::columns_for(Mode::Perf).iter().map(|column| (*column).to_string()).collect();
    if invoker.columns != expected {
        return Err(format!("invocations out of order: {}", invoker.columns.join(", ")));
    }
    if report.len() != expected.len() {
        return Err(format!("expected {} outcomes, got {}", expected.len(), report.len()));
    }
    if !report.all_succeeded() {
        return Err("all-success sweep reported a failure".to_string());
    }
    Ok(())
}

#[test]
fn sweep_continues_after_engine_failure() -> TestResult {
    let request = request(Mode::Perf, ColumnSelector::All)?;
    let mut invoker = RecordingInvoker::new(vec![
        Reply::Exit(EngineExit::Success),
        Reply::Exit(EngineExit::Failure(Some(1))),
        Reply::Spawn("missing engine"),
    ]);

    let report =
        run_sweep(&request, &layout(), &env(), &mut invoker).map_err(|err| err.to_string())?;

    let catalog_len = catalog::columns_for(Mode::Perf).len();
    if invoker.columns.len() != catalog_len {
        return Err(format!(
            "expected {catalog_len} invocations despite failures, got {}",
            invoker.columns.len()
        ));
    }
    if report.all_succeeded() {
        return Err("failures were not recorded in the report".to_string());
    }
    match report.outcomes.get(1).map(|outcome| &outcome.status) {
        Some(UnitStatus::Exited(EngineExit::Failure(Some(1)))) => {}
        _ => return Err("non-zero exit was not recorded for the second unit".to_string()),
    }
    match report.outcomes.get(2).map(|outcome| &outcome.status) {
        Some(UnitStatus::SpawnFailed(message)) if message.contains("missing engine") => {}
        _ => return Err("spawn failure was not recorded for the third unit".to_string()),
    }
    Ok(())
}

#[test]
fn unknown_column_aborts_before_any_invocation() -> TestResult {
    let request = request(Mode::Attack, ColumnSelector::from_name("reordered"))?;
    let mut invoker = RecordingInvoker::new(Vec::new());

    match run_sweep(&request, &layout(), &env(), &mut invoker) {
        Ok(_) => return Err("expected planning to fail for unknown column".to_string()),
        Err(err) => {
            if !err.to_string().contains("unknown column") {
                return Err(format!("unexpected planning error: {err}"));
            }
        }
    }
    if !invoker.columns.is_empty() {
        return Err("invocations were attempted after a planning failure".to_string());
    }
    Ok(())
}

#[test]
fn environment_is_reused_unmodified_across_units() -> TestResult {
    let request = request(Mode::Perf, ColumnSelector::All)?;
    let mut invoker = RecordingInvoker::new(Vec::new());
    let sweep_env = env();

    run_sweep(&request, &layout(), &sweep_env, &mut invoker).map_err(|err| err.to_string())?;

    for observed in &invoker.envs {
        if *observed != sweep_env {
            return Err("a unit observed a mutated execution environment".to_string());
        }
    }
    Ok(())
}

#[test]
fn single_column_sweep_invokes_exactly_once() -> TestResult {
    let request = request(Mode::Attack, ColumnSelector::from_name("AGEP"))?;
    let mut invoker = RecordingInvoker::new(Vec::new());

    let report =
        run_sweep(&request, &layout(), &env(), &mut invoker).map_err(|err| err.to_string())?;

    if invoker.columns != ["AGEP".to_string()] {
        return Err(format!("unexpected invocations: {}", invoker.columns.join(", ")));
    }
    if report.len() != 1 || report.is_empty() {
        return Err("report does not describe a single-unit sweep".to_string());
    }
    Ok(())
}
