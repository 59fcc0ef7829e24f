//! Configuration management module.
//!
//! Settings are read from a TOML file (`config.toml` by default). A missing
//! file means defaults; a file that does not parse is fatal. A fixed set of
//! `CERTPILOT_*` environment variables is applied on top, so a container can
//! be configured without shipping a file at all.
//!
//! # Example
//!
//! ```rust,ignore
//! use certpilot::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml")?;
//! Configuration::save_from_config("config.toml", &Configuration::init())?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
