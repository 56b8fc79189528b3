// crates/eval-sweep-core/src/driver.rs
// ============================================================================
// Module: Sweep Driver
// Description: Sequential best-effort execution of planned invocation units.
// Purpose: Drive one engine process per unit, in plan order, recording each
//          outcome without escalating per-unit failures.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The driver is a stateless single-pass loop. Planning errors abort before
//! any process is spawned; after that, every unit runs regardless of how
//! earlier units fared. The engine is reached through the [`EngineInvoker`]
//! seam so tests can record invocations without spawning processes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;

use crate::env::ExecutionEnv;
use crate::error::SweepError;
use crate::plan::InvocationUnit;
use crate::plan::SweepLayout;
use crate::plan::plan_sweep;
use crate::request::SweepRequest;

// ============================================================================
// SECTION: Invoker Seam
// ============================================================================

/// Terminal state of one engine process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineExit {
    /// The engine exited with status zero.
    Success,
    /// The engine exited non-zero (code, when one was reported).
    Failure(Option<i32>),
}

impl EngineExit {
    /// Reports whether this exit is a success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Executes one invocation unit against the external engine.
pub trait EngineInvoker {
    /// Runs the unit to completion, blocking until the process terminates.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the process cannot be started at all;
    /// the driver records the failure and continues the sweep.
    fn invoke(&mut self, unit: &InvocationUnit, env: &ExecutionEnv) -> io::Result<EngineExit>;
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// How one unit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    /// The engine process ran and terminated.
    Exited(EngineExit),
    /// The engine process could not be started.
    SpawnFailed(String),
}

/// The recorded outcome of one invocation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutcome {
    /// The unit that was executed.
    pub unit: InvocationUnit,
    /// How the unit ended.
    pub status: UnitStatus,
}

/// Per-unit outcomes of one sweep, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Outcomes in the exact order units were executed.
    pub outcomes: Vec<UnitOutcome>,
}

impl SweepReport {
    /// Number of units executed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Reports whether no units were executed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Reports whether every unit ran and exited successfully.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| matches!(outcome.status, UnitStatus::Exited(exit) if exit.is_success()))
    }
}

// ============================================================================
// SECTION: Driver
// ============================================================================

/// Runs one sweep: plan, then execute every unit sequentially.
///
/// Units execute in exact plan order, one blocking invocation at a time.
/// Per-unit failures (spawn errors and non-zero exits) are recorded in the
/// report and never abort the sweep.
///
/// # Errors
///
/// Returns [`SweepError`] only for planning failures, before any process
/// has been spawned.
pub fn run_sweep<I: EngineInvoker>(
    request: &SweepRequest,
    layout: &SweepLayout,
    env: &ExecutionEnv,
    invoker: &mut I,
) -> Result<SweepReport, SweepError> {
    let units = plan_sweep(request, layout)?;

    let mut outcomes = Vec::with_capacity(units.len());
    for unit in units {
        let status = match invoker.invoke(&unit, env) {
            Ok(exit) => UnitStatus::Exited(exit),
            Err(err) => UnitStatus::SpawnFailed(err.to_string()),
        };
        outcomes.push(UnitOutcome {
            unit,
            status,
        });
    }

    Ok(SweepReport {
        outcomes,
    })
}
