use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream returned {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("unknown category: {0}")]
    InvalidCategory(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::InvalidCategory(_) | AppError::InvalidQuery(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            other => {
                tracing::error!(error = %other, "news request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch news".to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<crate::news::models::UnknownCategory> for AppError {
    fn from(err: crate::news::models::UnknownCategory) -> Self {
        AppError::InvalidCategory(err.0)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
