use crate::auth::enums::token_source::TokenSource;
use crate::auth::structs::auth_token_holder::AuthTokenHolder;
use arc_swap::ArcSwap;
use log::{debug, info, warn};
use std::sync::Arc;

impl AuthTokenHolder {
    pub fn new(initial: String) -> Self {
        Self {
            token: ArcSwap::from_pointee(initial),
        }
    }

    /// Initial load at startup. A failed read leaves authentication disabled.
    pub async fn load(source: &TokenSource) -> Self {
        match source.load().await {
            Ok(token) => Self::new(token),
            Err(error) => {
                if source.is_explicit() {
                    warn!("[TOKEN] Failed to read token file {}: {}", source, error);
                }
                Self::new(String::new())
            }
        }
    }

    pub fn current(&self) -> Arc<String> {
        self.token.load_full()
    }

    pub fn replace(&self, token: String) {
        self.token.store(Arc::new(token));
    }

    pub fn is_enabled(&self) -> bool {
        !self.token.load().is_empty()
    }

    /// True when no token is held, or `header` is exactly `Bearer <token>`.
    pub fn authorize(&self, header: Option<&str>) -> bool {
        let token = self.token.load();
        if token.is_empty() {
            return true;
        }
        match header.and_then(|value| value.strip_prefix("Bearer ")) {
            Some(presented) => presented == token.as_str(),
            None => false,
        }
    }

    /// Re-reads `source` and swaps in a changed non-empty value.
    ///
    /// Returns true when the held token changed. Read failures keep the
    /// current value and are only reported for an explicitly configured file.
    pub async fn reload(&self, source: &TokenSource) -> bool {
        let fresh = match source.load().await {
            Ok(token) => token,
            Err(error) => {
                if source.is_explicit() {
                    warn!("[TOKEN] Failed to read token file {}: {}", source, error);
                } else {
                    debug!("[TOKEN] Token file {} not readable: {}", source, error);
                }
                return false;
            }
        };
        if fresh.is_empty() || fresh == *self.token.load_full() {
            return false;
        }
        self.replace(fresh);
        info!("[TOKEN] API token updated");
        true
    }
}

impl std::fmt::Debug for AuthTokenHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokenHolder")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
