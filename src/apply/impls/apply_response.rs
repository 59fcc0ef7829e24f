use crate::apply::enums::apply_status::ApplyStatus;
use crate::apply::structs::apply_response::ApplyResponse;

impl ApplyResponse {
    pub fn success(output: String) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: ApplyStatus::Success,
            output,
            error: String::new(),
        }
    }

    pub fn failure(output: String, error: String) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: ApplyStatus::Error,
            output,
            error,
        }
    }
}
