use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not configured")]
    Configuration(&'static str),

    #[error("{0}")]
    Input(&'static str),

    #[error("vision API error: {0}")]
    Upstream(u16),

    #[error("vision API returned no content")]
    EmptyCompletion,

    #[error("failed to parse nutrition analysis")]
    Parse,

    #[error("vision API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("record store error: {0}")]
    Store(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Store(e)
    }
}

/// Every fatal error is a flat `{"error": ...}` envelope with HTTP 500, the
/// contract the web client already handles. Error kinds are distinguished by
/// message, not status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
