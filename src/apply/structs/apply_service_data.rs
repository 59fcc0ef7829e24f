use crate::auth::structs::auth_token_holder::AuthTokenHolder;
use std::sync::Arc;

/// Shared application data available to the apply handler.
#[derive(Debug)]
pub struct ApplyServiceData {
    pub token_holder: Arc<AuthTokenHolder>,
    /// Program followed by its arguments; the body is written to its stdin.
    pub apply_command: Vec<String>,
    pub max_body_size: usize,
}
