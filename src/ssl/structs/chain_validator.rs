use rustls::pki_types::ServerName;
use rustls::sign::SigningKey;
use std::sync::Arc;

/// Checks candidate chains against the expected hostname and the process key.
pub struct ChainValidator {
    pub(crate) signing_key: Arc<dyn SigningKey>,
    pub(crate) server_name: ServerName<'static>,
}
