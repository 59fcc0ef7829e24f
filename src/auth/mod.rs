//! Bearer token handling for the apply endpoint.
//!
//! The token is either given directly or read from a mounted secret file. It
//! is loaded once at startup and re-read on the certificate check cadence by
//! the reload task. An empty token disables authentication.

/// Token source enumerations.
pub mod enums;

/// Token holder structure.
pub mod structs;

/// Implementation blocks for token loading and authorization.
pub mod impls;

/// Unit tests for token handling.
pub mod tests;
