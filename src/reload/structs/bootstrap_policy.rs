use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPolicy {
    pub retry_interval: Duration,
    /// `None` retries until shutdown.
    pub max_attempts: Option<u32>,
    pub key_poll_interval: Duration,
    pub key_settle_delay: Duration,
}
