use crate::ssl::structs::live_cert_store::LiveCertStore;
use std::sync::Arc;

pub struct DynamicCertificateResolver {
    pub(crate) store: Arc<LiveCertStore>,
}
