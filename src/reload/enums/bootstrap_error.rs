use crate::ssl::enums::certificate_error::CertificateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("No usable certificate source: {0} is unusable and no remote certificate manager is configured")]
    NoCertificateSource(String),
    #[error("Giving up after {0} attempts to fetch the certificate")]
    AttemptsExhausted(u32),
    #[error("Bootstrap cancelled by shutdown")]
    Cancelled,
    #[error(transparent)]
    Certificate(#[from] CertificateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_error_display() {
        let err = BootstrapError::AttemptsExhausted(3);
        assert_eq!(err.to_string(), "Giving up after 3 attempts to fetch the certificate");
        let err: BootstrapError = CertificateError::EmptyChain.into();
        assert_eq!(err.to_string(), "No certificate chain provided");
    }
}
