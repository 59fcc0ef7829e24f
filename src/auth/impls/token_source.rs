use crate::auth::enums::token_source::{TokenSource, DEFAULT_TOKEN_FILE};
use std::path::PathBuf;

impl TokenSource {
    /// A non-empty static token wins over any file.
    pub fn from_config(token: &str, token_file: &str) -> Self {
        if !token.is_empty() {
            return TokenSource::Static(token.to_string());
        }
        if !token_file.is_empty() {
            return TokenSource::File {
                path: PathBuf::from(token_file),
                explicit: true,
            };
        }
        TokenSource::File {
            path: PathBuf::from(DEFAULT_TOKEN_FILE),
            explicit: false,
        }
    }

    pub async fn load(&self) -> Result<String, std::io::Error> {
        match self {
            TokenSource::Static(token) => Ok(token.clone()),
            TokenSource::File { path, .. } => {
                let data = tokio::fs::read_to_string(path).await?;
                Ok(data.trim().to_string())
            }
        }
    }

    pub fn is_explicit(&self) -> bool {
        match self {
            TokenSource::Static(_) => true,
            TokenSource::File { explicit, .. } => *explicit,
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Static(_) => write!(f, "static token"),
            TokenSource::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}
