//! Enumerations for certificate handling.

/// Errors raised while reading, fetching or validating certificates.
pub mod certificate_error;

/// Origin of an active certificate (local file or remote peer).
pub mod cert_origin;

/// Certificate acquisition strategies.
pub mod cert_source;
