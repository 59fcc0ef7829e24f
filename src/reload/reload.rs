use crate::reload::enums::bootstrap_error::BootstrapError;
use crate::reload::structs::bootstrap_policy::BootstrapPolicy;
use crate::ssl::enums::cert_origin::CertOrigin;
use crate::ssl::enums::cert_source::CertSource;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_chain::CertificateChain;
use crate::ssl::structs::remote_peer::RemotePeer;
use log::{info, warn};
use std::path::Path;
use std::time::Duration;
use tokio::sync::watch;

/// Blocks until the key file exists, waits the settle delay, then reads it.
pub async fn wait_for_key(
    path: &Path,
    policy: &BootstrapPolicy,
    shutdown: &mut watch::Receiver<bool>,
) -> Result<Vec<u8>, BootstrapError> {
    let mut announced = false;
    while !is_file(path).await {
        if !announced {
            info!("[BOOT] Waiting for key file {}...", path.display());
            announced = true;
        }
        sleep_or_cancel(policy.key_poll_interval, shutdown).await?;
    }
    sleep_or_cancel(policy.key_settle_delay, shutdown).await?;

    tokio::fs::read(path)
        .await
        .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", path.display(), e)).into())
}

/// Acquires the first chain: the local file if it decodes, otherwise the
/// remote peer, retried every `retry_interval` within the attempt budget.
pub async fn bootstrap_chain(
    local: &Path,
    remote: Option<&RemotePeer>,
    policy: &BootstrapPolicy,
    shutdown: &mut watch::Receiver<bool>,
) -> Result<(CertificateChain, CertOrigin), BootstrapError> {
    let local_source = CertSource::LocalStorage(local.to_path_buf());
    match local_source.acquire().await {
        Ok(chain) => {
            info!("[BOOT] Loaded certificate from {}", local.display());
            return Ok((chain, local_source.origin()));
        }
        Err(e) => {
            warn!("[BOOT] Local certificate unusable: {}", e);
        }
    }

    let Some(peer) = remote else {
        return Err(BootstrapError::NoCertificateSource(local.display().to_string()));
    };

    let remote_source = CertSource::RemotePeer(peer.clone());
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        info!("[BOOT] Fetching certificate from {} (attempt {})", peer, attempt);
        match remote_source.acquire().await {
            Ok(chain) => {
                info!("[BOOT] Fetched {} certificate(s) from {}", chain.len(), peer);
                return Ok((chain, remote_source.origin()));
            }
            Err(e) => {
                warn!("[BOOT] {}", e);
            }
        }
        if policy.max_attempts.is_some_and(|max| attempt >= max) {
            return Err(BootstrapError::AttemptsExhausted(attempt));
        }
        sleep_or_cancel(policy.retry_interval, shutdown).await?;
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

async fn sleep_or_cancel(period: Duration, shutdown: &mut watch::Receiver<bool>) -> Result<(), BootstrapError> {
    if *shutdown.borrow_and_update() {
        return Err(BootstrapError::Cancelled);
    }
    tokio::select! {
        _ = tokio::time::sleep(period) => Ok(()),
        changed = shutdown.changed() => {
            if changed.is_err() || *shutdown.borrow() {
                Err(BootstrapError::Cancelled)
            } else {
                Ok(())
            }
        }
    }
}
