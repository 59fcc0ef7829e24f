use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::live_cert_store::LiveCertStore;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for DynamicCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCertificateResolver")
            .field("generation", &self.store.generation())
            .finish()
    }
}

impl DynamicCertificateResolver {
    pub fn new(store: Arc<LiveCertStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<LiveCertStore> {
        &self.store
    }
}

impl ResolvesServerCert for DynamicCertificateResolver {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        Some(self.store.current().certificate.certified_key())
    }
}
