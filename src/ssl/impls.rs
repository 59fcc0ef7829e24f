//! Implementation blocks for certificate types.

/// CertificateChain: PEM decode/encode and accessors.
pub mod certificate_chain;

/// Fingerprint: SHA-256 over the chain, hex Display.
pub mod fingerprint;

/// ServableCertificate: accessors over the rustls CertifiedKey.
pub mod servable_certificate;

/// LiveCertState construction and Debug/Display.
pub mod live_cert_state;

/// LiveCertStore: current/replace.
pub mod live_cert_store;

/// ChainValidator and the stateless `validate_chain`.
pub mod chain_validator;

/// CertSource: local read or remote fetch.
pub mod cert_source;

/// RemotePeer: TLS dial that returns the presented chain.
pub mod remote_peer;

/// ServerCertVerifier that defers trust to the validator.
pub mod no_certificate_verification;

/// ResolvesServerCert backed by the live store.
pub mod dynamic_certificate_resolver;
