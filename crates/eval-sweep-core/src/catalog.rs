// crates/eval-sweep-core/src/catalog.rs
// ============================================================================
// Module: Column Catalogs
// Description: Static, ordered per-mode catalogs of sweepable columns.
// Purpose: Declare which dataset attributes each mode can evaluate and in
//          which order a full sweep visits them.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Each [`Mode`] owns a fixed, ordered catalog of column names. The catalogs
//! are static configuration, never derived from disk; they must match the
//! suite files actually present under the suites root, and a mismatch only
//! surfaces as a failed engine invocation at execution time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::mode::Mode;

// ============================================================================
// SECTION: Catalogs
// ============================================================================

/// Columns evaluated by a full performance sweep, in sweep order.
pub const PERF_COLUMNS: &[&str] = &[
    "add_to_cart_order",
    "order_hour_of_day",
    "order_dow",
    "AGEP",
    "SPORDER",
    "CIT",
    "HICOV",
];

/// Columns evaluated by a full attack sweep, in sweep order.
pub const ATTACK_COLUMNS: &[&str] = &["add_to_cart_order", "order_dow", "AGEP", "CIT"];

/// Returns the column catalog for a mode, in sweep order.
#[must_use]
pub const fn columns_for(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Perf => PERF_COLUMNS,
        Mode::Attack => ATTACK_COLUMNS,
    }
}

/// Reports whether `column` is a member of the mode's catalog.
#[must_use]
pub fn contains(mode: Mode, column: &str) -> bool {
    columns_for(mode).iter().any(|known| *known == column)
}
