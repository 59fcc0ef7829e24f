use crate::ssl::enums::cert_origin::CertOrigin;
use crate::ssl::structs::fingerprint::Fingerprint;
use crate::ssl::structs::servable_certificate::ServableCertificate;

/// One generation of the served identity.
#[derive(Clone)]
pub struct LiveCertState {
    pub certificate: ServableCertificate,
    pub fingerprint: Fingerprint,
    pub origin: CertOrigin,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub generation: u64,
}
