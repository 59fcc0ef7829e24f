//! Implementation blocks for common types.

/// CustomError constructors and Display.
pub mod custom_error;
