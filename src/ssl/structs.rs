//! Certificate data structures.

/// Ordered certificate chain with PEM encode/decode.
pub mod certificate_chain;

/// Change-detection digest over a chain.
pub mod fingerprint;

/// Validated chain + key bundle handed to rustls.
pub mod servable_certificate;

/// One generation of the active identity (bundle, fingerprint, metadata).
pub mod live_cert_state;

/// Lock-free holder of the active identity.
pub mod live_cert_store;

/// Hostname and key pairing checks.
pub mod chain_validator;

/// Remote certificate manager address.
pub mod remote_peer;

/// Handshake verifier that defers trust to the chain validator.
pub mod no_certificate_verification;

/// rustls resolver backed by the live store.
pub mod dynamic_certificate_resolver;
