//! Implementation blocks for apply types.

/// ApplyResponse constructors.
pub mod apply_response;

/// ApplyStatus Display.
pub mod apply_status;
