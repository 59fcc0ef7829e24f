//! # certpilot
//!
//! A TLS service that keeps serving under a continuously valid certificate
//! while that certificate is rotated out-of-band.
//!
//! ## Overview
//!
//! The certificate chain is read from a mounted secret or fetched from a
//! certificate manager during a TLS handshake. Every candidate chain is
//! checked against the expected hostname and the process private key before
//! it is published, and publication is a single atomic swap read by every new
//! handshake. A background task re-checks the sources and the bearer token on
//! a fixed interval.
//!
//! The listener carries one endpoint, `POST /apply`, which pipes an
//! authenticated manifest into `kubectl apply -f -`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use certpilot::config::structs::configuration::Configuration;
//! use certpilot::ssl::structs::chain_validator::ChainValidator;
//! use certpilot::ssl::structs::live_cert_store::LiveCertStore;
//!
//! let config = Configuration::load_from_file("config.toml")?;
//! let validator = ChainValidator::from_key_pem(&key_pem, &config.server_name)?;
//! let store = LiveCertStore::new(validator.validate(&chain, origin)?);
//! ```
//!
//! ## Modules
//!
//! - [`apply`] - The `/apply` endpoint and its TLS listener
//! - [`auth`] - Bearer token loading and checking
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`reload`] - Startup acquisition and periodic certificate reload
//! - [`ssl`] - Certificate chains, validation and the live store
//! - [`structs`] - CLI argument parsing

/// Apply bridge module.
///
/// Serves `POST /apply` over the hot-reloadable TLS identity and pipes the
/// request body into the configured apply command.
pub mod apply;

/// Bearer token module.
///
/// Loads the token from configuration or a secret file and keeps it in an
/// atomically replaceable holder.
pub mod auth;

/// Common utilities and shared functionality.
///
/// Contains logging setup, duration parsing and the startup error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files
/// and environment variables.
pub mod config;

/// Certificate bootstrap and reload module.
///
/// Waits for the key, acquires the first chain with retries, and keeps the
/// live certificate up to date.
pub mod reload;

/// SSL/TLS certificate management module.
///
/// Provides chain decoding, fingerprinting, validation, the lock-free live
/// store, and the rustls resolver reading from it.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
