//! Apply data structures.

/// JSON body returned by `/apply`.
pub mod apply_response;

/// Shared data context for the apply handler.
pub mod apply_service_data;
