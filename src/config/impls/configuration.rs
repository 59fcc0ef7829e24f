use crate::common::common::{parse_duration, parse_log_level};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;
use crate::ssl::structs::remote_peer::RemotePeer;
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::net::SocketAddr;
use std::time::Duration;

pub const ENV_LOG_LEVEL: &str = "CERTPILOT_LOG_LEVEL";
pub const ENV_LISTEN_ADDR: &str = "CERTPILOT_LISTEN_ADDR";
pub const ENV_SERVER_NAME: &str = "CERTPILOT_SERVER_NAME";
pub const ENV_CERTMGR_SERVER: &str = "CERTPILOT_CERTMGR_SERVER";
pub const ENV_TOKEN: &str = "CERTPILOT_TOKEN";
pub const ENV_TOKEN_FILE: &str = "CERTPILOT_TOKEN_FILE";
pub const ENV_CFG_CHECK_INTERVAL: &str = "CERTPILOT_CFG_CHECK_INTERVAL";

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            listen_address: String::from("0.0.0.0:8443"),
            server_name: String::from("certpilot.svc.cluster.local"),
            cert_path: String::from("/tls/tls.crt"),
            key_path: String::from("/tls/tls.key"),
            certmgr_server: String::new(),
            certmgr_port: 443,
            certmgr_timeout: 30,
            token: String::new(),
            token_file: String::new(),
            check_interval: 120,
            apply_command: vec![
                String::from("kubectl"),
                String::from("apply"),
                String::from("-f"),
                String::from("-"),
            ],
            max_body_size: 5 << 20,
            workers: 2,
            keep_alive: 120,
            request_timeout: 30,
            disconnect_timeout: 5,
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        Self::save_file(path, toml::to_string(config)?)
    }

    /// File (or defaults when it is missing), then the process environment,
    /// then validation.
    pub fn load_from_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let mut config = match Self::load_file(path) {
            Ok(config) => config,
            Err(ConfigurationError::IOError(e)) if e.kind() == ErrorKind::NotFound => {
                eprintln!("[CONFIG] No config file found at {}, using defaults", path);
                Self::init()
            }
            Err(e) => return Err(e),
        };
        for warning in config.apply_env_overrides(|key| std::env::var(key).ok()) {
            eprintln!("[CONFIG] {}", warning);
        }
        config.validate()?;
        Ok(config)
    }

    /// Applies the `CERTPILOT_*` variables found through `lookup`.
    ///
    /// Empty values are ignored. Returns warnings for values that were
    /// rejected; the previous setting stays in place for those.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut warnings = Vec::new();

        if let Some(value) = get(ENV_LOG_LEVEL) {
            self.log_level = value;
        }
        if let Some(value) = get(ENV_LISTEN_ADDR) {
            self.listen_address = match value.strip_prefix(':') {
                Some(port) => format!("0.0.0.0:{}", port),
                None => value,
            };
        }
        if let Some(value) = get(ENV_SERVER_NAME) {
            self.server_name = value;
        }
        if let Some(value) = get(ENV_CERTMGR_SERVER) {
            self.certmgr_server = value;
        }
        if let Some(value) = get(ENV_TOKEN) {
            self.token = value;
        }
        if let Some(value) = get(ENV_TOKEN_FILE) {
            self.token_file = value;
        }
        if let Some(value) = get(ENV_CFG_CHECK_INTERVAL) {
            match parse_duration(&value).map(|duration| duration.as_secs()) {
                Some(seconds) if seconds > 0 => self.check_interval = seconds,
                _ => warnings.push(format!(
                    "Ignoring invalid {} value {:?}, keeping {}s",
                    ENV_CFG_CHECK_INTERVAL, value, self.check_interval
                )),
            }
        }

        warnings
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(&self.log_level).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        self.listen_socket_addr()?;
        if self.server_name.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("server_name is empty")));
        }
        if self.check_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("check_interval must be at least 1 second")));
        }
        if self.apply_command.first().is_none_or(|program| program.is_empty()) {
            return Err(ConfigurationError::ValidationError(String::from("apply_command is empty")));
        }
        Ok(())
    }

    pub fn listen_socket_addr(&self) -> Result<SocketAddr, ConfigurationError> {
        self.listen_address.parse().map_err(|e| {
            ConfigurationError::ValidationError(format!("listen_address {:?}: {}", self.listen_address, e))
        })
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval)
    }

    /// `None` when no certificate manager is configured.
    pub fn remote_peer(&self) -> Option<RemotePeer> {
        if self.certmgr_server.is_empty() {
            return None;
        }
        Some(RemotePeer::new(
            &self.certmgr_server,
            self.certmgr_port,
            &self.server_name,
            Duration::from_secs(self.certmgr_timeout),
        ))
    }

    /// Rows for `--env`: variable name and description.
    pub fn env_help() -> Vec<(&'static str, String)> {
        let defaults = Self::init();
        vec![
            (ENV_LOG_LEVEL, format!("Log level (default: {})", defaults.log_level)),
            (ENV_LISTEN_ADDR, format!("TLS listen address (default: {})", defaults.listen_address)),
            (ENV_SERVER_NAME, format!("Server name (default: {})", defaults.server_name)),
            (ENV_CERTMGR_SERVER, String::from("CertMgr to connect to when checking for certificate updates")),
            (ENV_TOKEN_FILE, format!(
                "File name to read the authentication token from (default: {})",
                crate::auth::enums::token_source::DEFAULT_TOKEN_FILE
            )),
            (ENV_TOKEN, String::from("Authentication token, overrides the token file")),
            (ENV_CFG_CHECK_INTERVAL, format!(
                "Certificate and token update check interval (default: {}s)",
                defaults.check_interval
            )),
        ]
    }
}
