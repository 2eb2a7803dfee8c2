use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("handoff error: {0}")]
    Handoff(#[from] HandoffError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Handoff(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Invalid business-hours configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid business hours json: {0}")]
    Json(String),

    #[error("invalid time format: {0}")]
    InvalidTime(String),

    #[error("invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("opening time {open} must be before closing time {close}")]
    EmptyRange { open: String, close: String },

    #[error("slot interval must be at least one minute")]
    ZeroInterval,

    #[error("{open}-{close} is shorter than one {slot_minutes}-minute slot")]
    IntervalExceedsHours {
        open: String,
        close: String,
        slot_minutes: u32,
    },

    #[error("handoff recipient has no digits: {0:?}")]
    MissingRecipient(String),
}

/// The handoff builder was given a request that never passed validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HandoffError {
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}
