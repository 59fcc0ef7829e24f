/// Where the chain behind a [`LiveCertState`](crate::ssl::structs::live_cert_state::LiveCertState) came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertOrigin {
    LocalStorage(String),
    RemotePeer(String),
}
