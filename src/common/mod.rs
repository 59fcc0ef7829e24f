//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Logging setup
//! - Go-style duration parsing for environment overrides
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for common utilities.
pub mod tests;
