use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_chain::CertificateChain;
use pem::{EncodeConfig, LineEnding, Pem};
use rustls::pki_types::CertificateDer;
use rustls_pemfile::Item;

const CERTIFICATE_LABEL: &str = "CERTIFICATE";

impl CertificateChain {
    pub fn new(certs: Vec<CertificateDer<'static>>) -> Self {
        Self { certs }
    }

    pub fn certs(&self) -> &[CertificateDer<'static>] {
        &self.certs
    }

    pub fn leaf(&self) -> Option<&CertificateDer<'static>> {
        self.certs.first()
    }

    pub fn len(&self) -> usize {
        self.certs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certs.is_empty()
    }

    /// Decodes every `CERTIFICATE` block in `data`, in order.
    ///
    /// Blocks with other labels (keys, CRLs, ...) are skipped. A broken block
    /// fails the whole decode.
    pub fn decode(data: &[u8]) -> Result<Self, CertificateError> {
        Self::decode_named(data, "PEM input")
    }

    pub(crate) fn decode_named(data: &[u8], name: &str) -> Result<Self, CertificateError> {
        let mut reader = data;
        let mut certs = Vec::new();
        loop {
            match rustls_pemfile::read_one(&mut reader) {
                Ok(Some(Item::X509Certificate(der))) => {
                    x509_parser::parse_x509_certificate(der.as_ref()).map_err(|e| {
                        CertificateError::CertParseError(format!(
                            "{}: certificate {}: {}",
                            name,
                            certs.len(),
                            e
                        ))
                    })?;
                    certs.push(der);
                }
                Ok(Some(_)) => continue,
                Ok(None) => break,
                Err(e) => {
                    return Err(CertificateError::CertParseError(format!("{}: {}", name, e)));
                }
            }
        }
        if certs.is_empty() {
            return Err(CertificateError::NoCertificatesFound(name.to_string()));
        }
        Ok(Self { certs })
    }

    /// One `CERTIFICATE` block per entry, LF line endings, input order.
    pub fn encode(&self) -> String {
        let blocks: Vec<Pem> = self
            .certs
            .iter()
            .map(|der| Pem::new(CERTIFICATE_LABEL, der.as_ref().to_vec()))
            .collect();
        pem::encode_many_config(&blocks, EncodeConfig::new().set_line_ending(LineEnding::LF))
    }
}

impl From<Vec<CertificateDer<'static>>> for CertificateChain {
    fn from(certs: Vec<CertificateDer<'static>>) -> Self {
        Self::new(certs)
    }
}
