//! TLS identity management.
//!
//! This module owns the certificate the process serves. A chain is acquired
//! from local storage or fetched from the certificate manager, checked against
//! the expected hostname and the process private key, and published to a
//! lock-free store that the TLS handshake reads on every connection.
//!
//! # Flow
//!
//! ```text
//! CertSource::acquire -> CertificateChain -> ChainValidator::validate
//!     -> LiveCertState -> LiveCertStore::replace -> DynamicCertificateResolver
//! ```
//!
//! # Hot Reload
//!
//! The store is swapped whole. In-flight handshakes keep the snapshot they
//! started with; new handshakes see the new chain. A chain that fails
//! validation never reaches the store.
//!
//! # Example
//!
//! ```rust,ignore
//! use certpilot::ssl::structs::chain_validator::ChainValidator;
//! use certpilot::ssl::structs::certificate_chain::CertificateChain;
//! use certpilot::ssl::structs::live_cert_store::LiveCertStore;
//!
//! let validator = ChainValidator::from_key_pem(&key_pem, "svc.example")?;
//! let chain = CertificateChain::decode(&cert_pem)?;
//! let store = LiveCertStore::new(validator.validate(&chain, origin)?);
//! ```

/// Certificate enumerations (errors, sources, origins).
pub mod enums;

/// Certificate data structures.
pub mod structs;

/// Implementation blocks for certificate types.
pub mod impls;

/// TLS config builders, chain inspection and development certificates.
#[allow(clippy::module_inception)]
pub mod ssl;
