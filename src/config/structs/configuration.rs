use crate::config::structs::sentry_config::SentryConfig;
use serde::{Deserialize, Serialize};

/// Durations are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub listen_address: String,
    /// Expected hostname on the leaf, also the SNI sent to the certificate manager.
    pub server_name: String,
    pub cert_path: String,
    pub key_path: String,
    /// Empty disables remote fetching.
    pub certmgr_server: String,
    pub certmgr_port: u16,
    pub certmgr_timeout: u64,
    pub token: String,
    pub token_file: String,
    pub check_interval: u64,
    pub apply_command: Vec<String>,
    pub max_body_size: usize,
    pub workers: u64,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub sentry_config: SentryConfig,
}
