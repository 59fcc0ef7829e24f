use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Certificate file not found: {0}")]
    CertFileNotFound(String),
    #[error("Failed to read certificate file: {0}")]
    CertReadError(String),
    #[error("Key file not found: {0}")]
    KeyFileNotFound(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("No certificates found in {0}")]
    NoCertificatesFound(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No private key found in file")]
    NoKeyFound,
    #[error("Failed to build certified key: {0}")]
    CertifiedKeyError(String),
    #[error("Invalid server name: {0}")]
    InvalidServerName(String),
    #[error("No certificate chain provided")]
    EmptyChain,
    #[error("Hostname verification failed for {server_name}: {reason}")]
    HostnameMismatch {
        server_name: String,
        reason: String,
    },
    #[error("Certificate/key mismatch: {0}")]
    KeyMismatch(String),
    #[error("Invalid certified key (empty chain or missing key)")]
    InvalidBundle,
    #[error("Remote fetch from {address} failed: {reason}")]
    FetchFailed {
        address: String,
        reason: String,
    },
    #[error("No certificates received from {0}")]
    NoCertificatesReceived(String),
    #[error("Failed to generate certificate: {0}")]
    GenerationError(String),
    #[error("Failed to write file: {0}")]
    WriteError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_error_display() {
        let err = CertificateError::CertFileNotFound("/tls/tls.crt".to_string());
        assert!(err.to_string().contains("Certificate file not found"));
        let err = CertificateError::NoKeyFound;
        assert!(err.to_string().contains("No private key found"));
        let err = CertificateError::EmptyChain;
        assert_eq!(err.to_string(), "No certificate chain provided");
    }

    #[test]
    fn test_hostname_mismatch_display() {
        let err = CertificateError::HostnameMismatch {
            server_name: "svc.example".to_string(),
            reason: "not valid for name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Hostname verification failed for svc.example: not valid for name"
        );
    }

    #[test]
    fn test_fetch_failed_display() {
        let err = CertificateError::FetchFailed {
            address: "certmgr:443".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().starts_with("Remote fetch from certmgr:443 failed"));
    }
}
