//! Implementation blocks for token types.

/// TokenSource: loading and selection from configuration.
pub mod token_source;

/// AuthTokenHolder: current/replace/authorize and reload.
pub mod auth_token_holder;
