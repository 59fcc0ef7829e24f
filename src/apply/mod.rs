//! Apply bridge served on the TLS listener.
//!
//! # Endpoints
//!
//! - `POST /apply` - Pipe the request body into the apply command
//!   (`kubectl apply -f -` by default) and return its combined output.
//!
//! When a bearer token is configured the request must carry
//! `Authorization: Bearer <token>`, otherwise it is answered with 403.
//! Bodies above the configured limit are answered with 413.
//!
//! # Response
//!
//! ```json
//! {"timestamp":"2026-01-01T00:00:00+00:00","status":"success","output":"deployment.apps/x configured"}
//! ```

/// Apply status enumeration.
pub mod enums;

/// Request and response data structures.
pub mod structs;

/// Implementation blocks for apply responses.
pub mod impls;

/// Service builder, routes and handler.
#[allow(clippy::module_inception)]
pub mod apply;

/// Unit tests for the apply bridge.
pub mod tests;
