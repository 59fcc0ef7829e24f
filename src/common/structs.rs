//! Common data structures.

/// Plain message error used on the startup path.
pub mod custom_error;
