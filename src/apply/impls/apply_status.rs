use crate::apply::enums::apply_status::ApplyStatus;

impl std::fmt::Display for ApplyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyStatus::Success => write!(f, "success"),
            ApplyStatus::Error => write!(f, "error"),
        }
    }
}
