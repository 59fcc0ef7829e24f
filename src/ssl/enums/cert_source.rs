use crate::ssl::structs::remote_peer::RemotePeer;
use std::path::PathBuf;

/// The two ways a certificate chain can be acquired.
#[derive(Debug, Clone)]
pub enum CertSource {
    /// PEM file on local storage (usually a mounted secret).
    LocalStorage(PathBuf),
    /// TLS handshake against the certificate manager.
    RemotePeer(RemotePeer),
}
