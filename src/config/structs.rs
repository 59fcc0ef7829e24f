//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Top-level configuration.
pub mod configuration;

/// Sentry error reporting settings.
pub mod sentry_config;
