use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, AdminError>;

/// Application-layer errors: everything a screen action can fail with.
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("gateway error: {0}")]
    Gateway(#[from] gateway::GatewayError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid {field} value '{value}': expected YYYY-MM-DDTHH:MM")]
    InvalidDateInput { field: &'static str, value: String },
}
