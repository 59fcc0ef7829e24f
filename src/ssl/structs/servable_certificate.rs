use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// A chain paired with the process signing key, ready for the handshake.
///
/// Only [`ChainValidator`](crate::ssl::structs::chain_validator::ChainValidator)
/// can build one, after the hostname and key pairing checks passed.
#[derive(Clone)]
pub struct ServableCertificate {
    pub(crate) certified_key: Arc<CertifiedKey>,
}
