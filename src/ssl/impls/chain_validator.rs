use crate::ssl::enums::cert_origin::CertOrigin;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_chain::CertificateChain;
use crate::ssl::structs::chain_validator::ChainValidator;
use crate::ssl::structs::fingerprint::Fingerprint;
use crate::ssl::structs::live_cert_state::LiveCertState;
use crate::ssl::structs::servable_certificate::ServableCertificate;
use rustls::client::verify_server_name;
use rustls::pki_types::{PrivateKeyDer, ServerName};
use rustls::server::ParsedCertificate;
use rustls::sign::{CertifiedKey, SigningKey};
use std::sync::Arc;

impl ChainValidator {
    pub fn new(signing_key: Arc<dyn SigningKey>, server_name: &str) -> Result<Self, CertificateError> {
        let server_name = ServerName::try_from(server_name.to_string())
            .map_err(|e| CertificateError::InvalidServerName(format!("{}: {}", server_name, e)))?;
        Ok(Self {
            signing_key,
            server_name,
        })
    }

    /// Parses the private key PEM once; the resulting signing key is shared by
    /// every certificate built afterwards.
    pub fn from_key_pem(key_pem: &[u8], server_name: &str) -> Result<Self, CertificateError> {
        let key = parse_private_key(key_pem)?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{}", e)))?;
        Self::new(signing_key, server_name)
    }

    pub fn validate(
        &self,
        chain: &CertificateChain,
        origin: CertOrigin,
    ) -> Result<LiveCertState, CertificateError> {
        validate_chain(chain, &self.signing_key, &self.server_name, origin)
    }
}

impl std::fmt::Debug for ChainValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainValidator")
            .field("server_name", &self.server_name)
            .field("key_algorithm", &self.signing_key.algorithm())
            .finish()
    }
}

pub fn validate_chain(
    chain: &CertificateChain,
    signing_key: &Arc<dyn SigningKey>,
    server_name: &ServerName<'static>,
    origin: CertOrigin,
) -> Result<LiveCertState, CertificateError> {
    let leaf = chain.leaf().ok_or(CertificateError::EmptyChain)?;

    let hostname_mismatch = |reason: String| CertificateError::HostnameMismatch {
        server_name: server_name.to_str().into_owned(),
        reason,
    };
    let parsed_leaf = ParsedCertificate::try_from(leaf).map_err(|e| hostname_mismatch(e.to_string()))?;
    verify_server_name(&parsed_leaf, server_name).map_err(|e| hostname_mismatch(e.to_string()))?;

    let certified_key = CertifiedKey::new(chain.certs().to_vec(), Arc::clone(signing_key));
    certified_key
        .keys_match()
        .map_err(|e| CertificateError::KeyMismatch(e.to_string()))?;

    if certified_key.cert.is_empty() {
        return Err(CertificateError::InvalidBundle);
    }

    Ok(LiveCertState::new(
        ServableCertificate::new(certified_key),
        Fingerprint::of(chain),
        origin,
    ))
}

pub fn parse_private_key(key_pem: &[u8]) -> Result<PrivateKeyDer<'static>, CertificateError> {
    let mut reader = key_pem;
    rustls_pemfile::private_key(&mut reader)
        .map_err(|e| CertificateError::KeyParseError(e.to_string()))?
        .ok_or(CertificateError::NoKeyFound)
}
