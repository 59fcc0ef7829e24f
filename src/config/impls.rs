//! Implementation blocks for configuration types.

/// Configuration: defaults, file loading, environment overrides, validation.
pub mod configuration;

/// SentryConfig defaults.
pub mod sentry_config;
