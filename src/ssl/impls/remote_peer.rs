use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::ring_provider;
use crate::ssl::structs::certificate_chain::CertificateChain;
use crate::ssl::structs::no_certificate_verification::NoCertificateVerification;
use crate::ssl::structs::remote_peer::RemotePeer;
use rustls::pki_types::ServerName;
use rustls::ClientConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

impl RemotePeer {
    pub fn new(host: &str, port: u16, sni: &str, timeout: Duration) -> Self {
        Self {
            host: host.to_string(),
            port,
            sni: sni.to_string(),
            timeout,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Dials the peer, completes a handshake presenting `sni`, and returns the
    /// chain it offered (leaf first). The whole dial is bounded by `timeout`.
    pub async fn fetch_chain(&self) -> Result<CertificateChain, CertificateError> {
        let address = self.address();
        let fetch_failed = |reason: String| CertificateError::FetchFailed {
            address: address.clone(),
            reason,
        };

        let server_name = ServerName::try_from(self.sni.clone())
            .map_err(|e| fetch_failed(format!("invalid SNI {}: {}", self.sni, e)))?;
        let connector = TlsConnector::from(Arc::new(Self::client_config().map_err(|e| fetch_failed(e.to_string()))?));

        let handshake = async move {
            let stream = TcpStream::connect((self.host.as_str(), self.port))
                .await
                .map_err(|e| fetch_failed(e.to_string()))?;
            connector
                .connect(server_name, stream)
                .await
                .map_err(|e| fetch_failed(e.to_string()))
        };
        let tls_stream = tokio::time::timeout(self.timeout, handshake)
            .await
            .map_err(|_| fetch_failed(format!("timed out after {:?}", self.timeout)))??;

        let (_, connection) = tls_stream.get_ref();
        let certs = connection
            .peer_certificates()
            .map(|certs| certs.iter().map(|c| c.clone().into_owned()).collect::<Vec<_>>())
            .unwrap_or_default();
        if certs.is_empty() {
            return Err(CertificateError::NoCertificatesReceived(address));
        }
        Ok(CertificateChain::new(certs))
    }

    fn client_config() -> Result<ClientConfig, rustls::Error> {
        let provider = ring_provider();
        Ok(ClientConfig::builder_with_provider(Arc::clone(&provider))
            .with_safe_default_protocol_versions()?
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(NoCertificateVerification::new(provider)))
            .with_no_client_auth())
    }
}

impl std::fmt::Display for RemotePeer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (SNI {})", self.address(), self.sni)
    }
}
