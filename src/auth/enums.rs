//! Enumerations for token handling.

/// Where the bearer token is read from.
pub mod token_source;
