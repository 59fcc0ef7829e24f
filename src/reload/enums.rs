//! Enumerations for bootstrap and reload.

/// Result of a single reload cycle.
pub mod reload_outcome;

/// Startup acquisition failures.
pub mod bootstrap_error;
