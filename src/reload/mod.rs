//! Certificate bootstrap and periodic reload.
//!
//! At startup [`reload::wait_for_key`] blocks until the private key is
//! mounted and [`reload::bootstrap_chain`] acquires the first chain, local
//! storage first and the certificate manager as fallback. Afterwards the
//! [`ReloadScheduler`](structs::reload_scheduler::ReloadScheduler) re-checks
//! both sources and the bearer token on a fixed interval and swaps the live
//! store only when the chain actually changed and passed validation.

/// Reload enumerations (tick outcomes, bootstrap errors).
pub mod enums;

/// Reload data structures.
pub mod structs;

/// Implementation blocks for the reload types.
pub mod impls;

/// Startup acquisition helpers.
#[allow(clippy::module_inception)]
pub mod reload;
