use crate::ssl::structs::certificate_chain::CertificateChain;
use crate::ssl::structs::fingerprint::Fingerprint;
use sha2::{Digest, Sha256};

impl Fingerprint {
    pub fn of(chain: &CertificateChain) -> Self {
        let mut hasher = Sha256::new();
        for cert in chain.certs() {
            hasher.update(cert.as_ref());
        }
        Fingerprint(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
