//! Token data structures.

/// Shared holder of the current bearer token.
pub mod auth_token_holder;
