//! Reload data structures.

/// Cancellable fixed-period task runner.
pub mod interval_task;

/// Backoff and budget for the startup acquisition.
pub mod bootstrap_policy;

/// Periodic certificate and token refresher.
pub mod reload_scheduler;
