#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// No local file and no remote peer configured.
    NoSource,
    AcquireFailed(String),
    /// Fingerprint equals the active one.
    Unchanged,
    /// New chain failed validation; the active one stays.
    Rejected(String),
    Swapped {
        certificates: usize,
        generation: u64,
    },
}
