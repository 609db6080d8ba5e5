use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::OAuthError;
use thiserror::Error;
use todo_domain::json::DecodeError;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(OAuthError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                OAuthError::not_found("Resource was not found"),
            ),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, OAuthError::invalid_request(&message))
            }
            ApiError::Unauthorized(error) => (StatusCode::UNAUTHORIZED, error),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                OAuthError::server_error("Internal server error"),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DecodeError> for ApiError {
    fn from(e: DecodeError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "Store error");
        ApiError::Internal(e.to_string())
    }
}
