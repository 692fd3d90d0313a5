//! Error types for album-directory HTTP handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::api::PrettyJson;

/// Message returned when an album lookup misses
pub const ALBUM_NOT_FOUND: &str = "album not found";

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API error type
///
/// Every variant renders as `{"message": ...}` with a matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Request body could not be bound (400)
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn album_not_found() -> Self {
        ApiError::NotFound(ALBUM_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        warn!("Rejected request body: {}", err);
        ApiError::BadRequest(format!("Invalid album body: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "message": self.to_string() });
        (self.status(), PrettyJson(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::album_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::BadRequest("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::album_not_found().to_string(), "album not found");
    }

    #[test]
    fn test_json_error_becomes_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let api_err = ApiError::from(err);
        assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
        assert!(api_err.to_string().starts_with("Invalid album body"));
    }
}
