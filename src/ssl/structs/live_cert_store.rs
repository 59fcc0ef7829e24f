use crate::ssl::structs::live_cert_state::LiveCertState;
use arc_swap::ArcSwap;

/// Holds the active [`LiveCertState`]; read on every handshake, swapped by the reload task.
pub struct LiveCertStore {
    pub(crate) state: ArcSwap<LiveCertState>,
}
