//! HTTP error handling and response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::domain::DomainError;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] DomainError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(DomainError::invalid_input(message))
    }

    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::TransportError(_) | DomainError::DecodingError(_) => {
                StatusCode::BAD_GATEWAY
            }
            DomainError::ConfigError(_) | DomainError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_type, message) = match self.0 {
            DomainError::InvalidInput(msg) => ("invalid_request_error", msg),
            DomainError::TransportError(msg) => ("upstream_error", msg),
            DomainError::DecodingError(msg) => ("decoding_error", msg),
            DomainError::ConfigError(msg) => ("server_error", msg),
            DomainError::IoError(err) => ("server_error", err.to_string()),
        };

        if status.is_server_error() {
            warn!("Request failed with {status}: {message}");
        }

        let body = Json(json!({
            "error": {
                "message": message,
                "type": error_type,
            }
        }));

        (status, body).into_response()
    }
}
