use crate::ssl::structs::fingerprint::Fingerprint;
use crate::ssl::structs::live_cert_state::LiveCertState;
use crate::ssl::structs::live_cert_store::LiveCertStore;
use arc_swap::ArcSwap;
use std::sync::Arc;

impl LiveCertStore {
    /// Seeds the store; there is no empty state.
    pub fn new(initial: LiveCertState) -> Self {
        Self {
            state: ArcSwap::from_pointee(initial),
        }
    }

    /// Lock-free snapshot of the active identity.
    pub fn current(&self) -> Arc<LiveCertState> {
        self.state.load_full()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.state.load().fingerprint
    }

    pub fn generation(&self) -> u64 {
        self.state.load().generation
    }

    /// Publishes `next` as a whole and returns the snapshot it replaced.
    ///
    /// The generation is derived from the replaced snapshot inside the swap,
    /// so concurrent writers never publish the same generation twice.
    pub fn replace(&self, next: LiveCertState) -> Arc<LiveCertState> {
        self.state.rcu(|previous| {
            let mut state = next.clone();
            state.generation = previous.generation + 1;
            state
        })
    }
}

impl std::fmt::Debug for LiveCertStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.state.load();
        f.debug_struct("LiveCertStore")
            .field("generation", &current.generation)
            .field("fingerprint", &current.fingerprint.to_string())
            .field("origin", &current.origin)
            .finish()
    }
}
