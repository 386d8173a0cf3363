use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidRequest(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::MethodNotAllowed => 405,
            AppError::PayloadTooLarge(_) => 413,
            AppError::UnsupportedMediaType(_) => 415,
            AppError::Validation(_) => 422,
            _ => 500,
        }
    }

    /// Message shown to the client. Server-side failures stay opaque.
    pub fn detail(&self) -> String {
        match self {
            AppError::InvalidRequest(msg)
            | AppError::UnsupportedMediaType(msg)
            | AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::MethodNotAllowed => "Method Not Allowed".to_string(),
            AppError::Database(_) | AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        (status, Json(ErrorResponse { detail: self.detail() })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidRequest("x".into()).status_code(), 400);
        assert_eq!(AppError::NotFound("x".into()).status_code(), 404);
        assert_eq!(AppError::MethodNotAllowed.status_code(), 405);
        assert_eq!(AppError::PayloadTooLarge("x".into()).status_code(), 413);
        assert_eq!(AppError::UnsupportedMediaType("x".into()).status_code(), 415);
        assert_eq!(AppError::Validation("x".into()).status_code(), 422);
        assert_eq!(AppError::Internal("x".into()).status_code(), 500);
        assert_eq!(AppError::Database(sqlx::Error::RowNotFound).status_code(), 500);
    }

    #[test]
    fn test_detail_hides_server_errors() {
        assert_eq!(
            AppError::NotFound("Board not found".into()).detail(),
            "Board not found"
        );
        assert_eq!(
            AppError::Internal("corrupt row".into()).detail(),
            "Internal server error"
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed).detail(),
            "Internal server error"
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::NotFound("Board not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
