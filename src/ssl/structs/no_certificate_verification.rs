use rustls::crypto::CryptoProvider;
use std::sync::Arc;

/// Accepts any server certificate during the handshake.
///
/// Used only when fetching our own chain from the certificate manager. The
/// fetched chain is trusted only after it passes hostname and key pairing in
/// [`ChainValidator`](crate::ssl::structs::chain_validator::ChainValidator).
/// Handshake signatures are still checked against the presented leaf key.
#[derive(Debug)]
pub(crate) struct NoCertificateVerification {
    pub(crate) provider: Arc<CryptoProvider>,
}
