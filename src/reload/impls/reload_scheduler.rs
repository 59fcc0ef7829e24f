use crate::auth::enums::token_source::TokenSource;
use crate::auth::structs::auth_token_holder::AuthTokenHolder;
use crate::reload::enums::reload_outcome::ReloadOutcome;
use crate::reload::structs::interval_task::IntervalTask;
use crate::reload::structs::reload_scheduler::ReloadScheduler;
use crate::ssl::enums::cert_source::CertSource;
use crate::ssl::ssl::dump_certificate_chain;
use crate::ssl::structs::chain_validator::ChainValidator;
use crate::ssl::structs::fingerprint::Fingerprint;
use crate::ssl::structs::live_cert_store::LiveCertStore;
use crate::ssl::structs::remote_peer::RemotePeer;
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

impl ReloadScheduler {
    pub fn new(
        store: Arc<LiveCertStore>,
        validator: Arc<ChainValidator>,
        token_holder: Arc<AuthTokenHolder>,
        token_source: TokenSource,
        cert_path: PathBuf,
        remote: Option<RemotePeer>,
        interval: Duration,
    ) -> Self {
        Self {
            store,
            validator,
            token_holder,
            token_source,
            cert_path,
            remote,
            interval,
        }
    }

    /// Local storage when the certificate file exists, otherwise the remote peer.
    pub async fn select_source(&self) -> Option<CertSource> {
        let local_exists = tokio::fs::metadata(&self.cert_path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false);
        if local_exists {
            return Some(CertSource::LocalStorage(self.cert_path.clone()));
        }
        self.remote.clone().map(CertSource::RemotePeer)
    }

    /// One reload cycle. Failures are logged and leave the store untouched.
    pub async fn tick(&self) -> ReloadOutcome {
        self.token_holder.reload(&self.token_source).await;

        let Some(source) = self.select_source().await else {
            debug!("[RELOAD] No certificate source available");
            return ReloadOutcome::NoSource;
        };

        let chain = match source.acquire().await {
            Ok(chain) => chain,
            Err(e) => {
                warn!("[RELOAD] Failed to acquire certificate from {}: {}", source, e);
                return ReloadOutcome::AcquireFailed(e.to_string());
            }
        };

        let fingerprint = Fingerprint::of(&chain);
        if fingerprint == self.store.fingerprint() {
            debug!("[RELOAD] Certificate from {} unchanged", source);
            return ReloadOutcome::Unchanged;
        }

        match self.validator.validate(&chain, source.origin()) {
            Ok(state) => {
                self.store.replace(state);
                let generation = self.store.generation();
                info!(
                    "[RELOAD] Certificate updated from {} (fingerprint {}, generation {})",
                    source, fingerprint, generation
                );
                dump_certificate_chain(chain.certs());
                ReloadOutcome::Swapped {
                    certificates: chain.len(),
                    generation,
                }
            }
            Err(e) => {
                error!("[RELOAD] Rejected new certificate from {}: {}", source, e);
                sentry::capture_message(
                    &format!("Rejected new certificate from {}: {}", source, e),
                    sentry::Level::Warning,
                );
                ReloadOutcome::Rejected(e.to_string())
            }
        }
    }

    pub async fn run(self, shutdown: watch::Receiver<bool>) {
        let scheduler = &self;
        IntervalTask::new("RELOAD", self.interval)
            .run(shutdown, || async move {
                scheduler.tick().await;
            })
            .await;
    }
}

impl std::fmt::Debug for ReloadScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadScheduler")
            .field("cert_path", &self.cert_path)
            .field("remote", &self.remote)
            .field("interval", &self.interval)
            .field("token_source", &self.token_source.to_string())
            .finish()
    }
}
