use std::path::PathBuf;

pub const DEFAULT_TOKEN_FILE: &str = "/var/run/secrets/certpilot/token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Static(String),
    File {
        path: PathBuf,
        /// Set when the path came from configuration rather than the default.
        explicit: bool,
    },
}
