use crate::reload::structs::bootstrap_policy::BootstrapPolicy;
use std::time::Duration;

impl Default for BootstrapPolicy {
    fn default() -> Self {
        Self {
            retry_interval: Duration::from_secs(30),
            max_attempts: None,
            key_poll_interval: Duration::from_secs(2),
            key_settle_delay: Duration::from_secs(2),
        }
    }
}
