use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Upstream request timed out")]
    UpstreamTimeout,

    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::BadRequest(format!("Request body is not valid JSON: {}", e))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::UpstreamTimeout
        } else {
            // Strip the URL so the log line stays short; it is always the configured upstream.
            AppError::UpstreamUnreachable(e.without_url().to_string())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::Upstream { status, body } => (status, "UPSTREAM_ERROR", body),
            AppError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_TIMEOUT",
                "Upstream request timed out".to_string(),
            ),
            AppError::UpstreamUnreachable(msg) => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_UNREACHABLE", msg)
            }
            AppError::Config(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR", msg)
            }
            AppError::IoError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                e.to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {} ({}) - {}", code, status, message);
        } else {
            tracing::warn!("Request failed: {} ({}) - {}", code, status, message);
        }

        (
            status,
            Json(ErrorResponse {
                detail: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}
