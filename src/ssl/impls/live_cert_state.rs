use crate::ssl::enums::cert_origin::CertOrigin;
use crate::ssl::structs::fingerprint::Fingerprint;
use crate::ssl::structs::live_cert_state::LiveCertState;
use crate::ssl::structs::servable_certificate::ServableCertificate;

impl LiveCertState {
    pub fn new(certificate: ServableCertificate, fingerprint: Fingerprint, origin: CertOrigin) -> Self {
        Self {
            certificate,
            fingerprint,
            origin,
            loaded_at: chrono::Utc::now(),
            generation: 0,
        }
    }
}

impl std::fmt::Debug for LiveCertState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveCertState")
            .field("certs_count", &self.certificate.len())
            .field("fingerprint", &self.fingerprint.to_string())
            .field("origin", &self.origin)
            .field("loaded_at", &self.loaded_at)
            .field("generation", &self.generation)
            .finish()
    }
}

impl std::fmt::Display for CertOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertOrigin::LocalStorage(path) => write!(f, "LocalStorage({})", path),
            CertOrigin::RemotePeer(address) => write!(f, "RemotePeer({})", address),
        }
    }
}
