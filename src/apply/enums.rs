//! Apply enumerations.

/// Outcome of an apply request.
pub mod apply_status;
