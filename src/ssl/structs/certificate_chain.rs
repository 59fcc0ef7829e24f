use rustls::pki_types::CertificateDer;

/// Ordered certificate chain, leaf first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateChain {
    pub(crate) certs: Vec<CertificateDer<'static>>,
}
