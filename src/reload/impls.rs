//! Implementation blocks for reload types.

/// IntervalTask: the tick/shutdown loop.
pub mod interval_task;

/// BootstrapPolicy defaults.
pub mod bootstrap_policy;

/// ReloadScheduler: tick and run.
pub mod reload_scheduler;
