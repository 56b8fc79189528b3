// crates/eval-sweep-core/src/lib.rs
// ============================================================================
// Module: Eval Sweep Core
// Description: Planning and dispatch model for engine evaluation sweeps.
// Purpose: Expand a run request into ordered engine invocations and drive
//          them sequentially through an injected invoker.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Eval Sweep core turns one immutable [`SweepRequest`] into a deterministic
//! sequence of engine invocations. Each invocation evaluates one dataset
//! column against an external engine binary reached purely through a
//! command-line contract; this crate never interprets engine output.
//!
//! Path derivation is a pure function of `(layout, mode, column)`. The
//! driver executes units strictly in catalog order, one blocking process at
//! a time, and never aborts a sweep because a single unit failed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod config;
pub mod driver;
pub mod env;
mod error;
pub mod mode;
pub mod plan;
pub mod request;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use catalog::columns_for;
pub use config::ConfigError;
pub use config::HarnessConfig;
pub use driver::EngineExit;
pub use driver::EngineInvoker;
pub use driver::SweepReport;
pub use driver::UnitOutcome;
pub use driver::UnitStatus;
pub use driver::run_sweep;
pub use env::ExecutionEnv;
pub use error::SweepError;
pub use mode::Mode;
pub use plan::InvocationUnit;
pub use plan::SweepLayout;
pub use plan::plan_sweep;
pub use request::ColumnSelector;
pub use request::SweepRequest;
