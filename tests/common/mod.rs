#![allow(dead_code)]
use rcgen::{Certificate, CertificateParams, KeyPair};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, SignatureScheme};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_rustls::TlsAcceptor;
use certpilot::ssl::enums::cert_origin::CertOrigin;
use certpilot::ssl::ssl::ring_provider;
use certpilot::ssl::structs::certificate_chain::CertificateChain;
use certpilot::ssl::structs::chain_validator::ChainValidator;
use certpilot::ssl::structs::live_cert_store::LiveCertStore;
use certpilot::ssl::structs::remote_peer::RemotePeer;

pub const SERVER_NAME: &str = "svc.example";

pub fn generate_key() -> KeyPair {
    KeyPair::generate().unwrap()
}

pub fn issue(names: &[&str], key: &KeyPair) -> Certificate {
    let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    CertificateParams::new(names).unwrap().self_signed(key).unwrap()
}

pub fn chain_pem(certs: &[&Certificate]) -> String {
    certs.iter().map(|c| c.pem()).collect::<Vec<_>>().concat()
}

pub fn chain_of(certs: &[&Certificate]) -> CertificateChain {
    CertificateChain::new(certs.iter().map(|c| c.der().clone()).collect())
}

pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn validator(key: &KeyPair) -> Arc<ChainValidator> {
    Arc::new(ChainValidator::from_key_pem(key.serialize_pem().as_bytes(), SERVER_NAME).unwrap())
}

pub fn local_origin(path: &Path) -> CertOrigin {
    CertOrigin::LocalStorage(path.display().to_string())
}

pub fn seeded_store(validator: &ChainValidator, chain: &CertificateChain, origin: CertOrigin) -> Arc<LiveCertStore> {
    Arc::new(LiveCertStore::new(validator.validate(chain, origin).unwrap()))
}

pub fn remote_peer(addr: SocketAddr) -> RemotePeer {
    RemotePeer::new(&addr.ip().to_string(), addr.port(), SERVER_NAME, Duration::from_secs(5))
}

pub fn closed_port_peer() -> RemotePeer {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    remote_peer(addr)
}

/// Accepts TLS handshakes with `server_config` until the handle is aborted.
pub async fn spawn_tls_server(server_config: rustls::ServerConfig) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let acceptor = TlsAcceptor::from(Arc::new(server_config));
    let handle = tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                let _ = acceptor.accept(stream).await;
            });
        }
    });
    (addr, handle)
}

/// A certificate manager stand-in presenting `certs` with `key`.
pub async fn spawn_tls_peer(certs: &[&Certificate], key: &KeyPair) -> (SocketAddr, JoinHandle<()>) {
    let chain: Vec<CertificateDer<'static>> = certs.iter().map(|c| c.der().clone()).collect();
    let private_key = certpilot::ssl::impls::chain_validator::parse_private_key(key.serialize_pem().as_bytes()).unwrap();
    let server_config = rustls::ServerConfig::builder_with_provider(ring_provider())
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_no_client_auth()
        .with_single_cert(chain, private_key)
        .unwrap();
    spawn_tls_server(server_config).await
}

/// Accepts TCP connections and never answers.
pub async fn spawn_silent_peer() -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    (addr, handle)
}

#[derive(Debug)]
pub struct AcceptAnyServerCert;

impl ServerCertVerifier for AcceptAnyServerCert {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        ring_provider().signature_verification_algorithms.supported_schemes()
    }
}

pub fn test_client_config() -> rustls::ClientConfig {
    rustls::ClientConfig::builder_with_provider(ring_provider())
        .with_safe_default_protocol_versions()
        .unwrap()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert))
        .with_no_client_auth()
}
