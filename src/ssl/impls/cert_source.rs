use crate::ssl::enums::cert_origin::CertOrigin;
use crate::ssl::enums::cert_source::CertSource;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_chain::CertificateChain;
use std::io::ErrorKind;
use std::path::Path;

impl CertSource {
    pub async fn acquire(&self) -> Result<CertificateChain, CertificateError> {
        match self {
            CertSource::LocalStorage(path) => Self::read_local(path).await,
            CertSource::RemotePeer(peer) => peer.fetch_chain().await,
        }
    }

    pub fn origin(&self) -> CertOrigin {
        match self {
            CertSource::LocalStorage(path) => CertOrigin::LocalStorage(path.display().to_string()),
            CertSource::RemotePeer(peer) => CertOrigin::RemotePeer(peer.address()),
        }
    }

    async fn read_local(path: &Path) -> Result<CertificateChain, CertificateError> {
        let name = path.display().to_string();
        let data = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => CertificateError::CertFileNotFound(format!("{}: {}", name, e)),
            _ => CertificateError::CertReadError(format!("{}: {}", name, e)),
        })?;
        CertificateChain::decode_named(&data, &name)
    }
}

impl std::fmt::Display for CertSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertSource::LocalStorage(path) => write!(f, "LocalStorage({})", path.display()),
            CertSource::RemotePeer(peer) => write!(f, "RemotePeer({})", peer),
        }
    }
}
