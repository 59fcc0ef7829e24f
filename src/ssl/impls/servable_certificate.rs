use crate::ssl::structs::servable_certificate::ServableCertificate;
use rustls::pki_types::CertificateDer;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl ServableCertificate {
    pub(crate) fn new(certified_key: CertifiedKey) -> Self {
        Self {
            certified_key: Arc::new(certified_key),
        }
    }

    pub fn certified_key(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.certified_key)
    }

    pub fn chain(&self) -> &[CertificateDer<'static>] {
        &self.certified_key.cert
    }

    pub fn len(&self) -> usize {
        self.certified_key.cert.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certified_key.cert.is_empty()
    }
}

impl std::fmt::Debug for ServableCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServableCertificate")
            .field("certs_count", &self.len())
            .field("key_algorithm", &self.certified_key.key.algorithm())
            .finish()
    }
}
