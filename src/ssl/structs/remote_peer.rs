use std::time::Duration;

/// Address of the certificate manager that presents our chain during a handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePeer {
    pub host: String,
    pub port: u16,
    pub sni: String,
    pub timeout: Duration,
}
