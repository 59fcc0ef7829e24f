use crate::auth::enums::token_source::TokenSource;
use crate::auth::structs::auth_token_holder::AuthTokenHolder;
use crate::ssl::structs::chain_validator::ChainValidator;
use crate::ssl::structs::live_cert_store::LiveCertStore;
use crate::ssl::structs::remote_peer::RemotePeer;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Single writer of the live certificate store and the token holder.
pub struct ReloadScheduler {
    pub(crate) store: Arc<LiveCertStore>,
    pub(crate) validator: Arc<ChainValidator>,
    pub(crate) token_holder: Arc<AuthTokenHolder>,
    pub(crate) token_source: TokenSource,
    pub(crate) cert_path: PathBuf,
    pub(crate) remote: Option<RemotePeer>,
    pub(crate) interval: Duration,
}
