use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use content_sync_core::Error as CoreError;
use serde_json::json;

/// API error type, rendered as `{ "error": message }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(String),

    /// Document store failure while applying a webhook event.
    #[error("webhook processing failed: {0}")]
    WebhookFailed(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CoreError::NotFound(what) => ApiError::NotFound(what),
            CoreError::Upstream(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) | ApiError::WebhookFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg) => {
                tracing::debug!("Not found: {msg}");
                "Not found".to_string()
            }
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized => "Invalid webhook secret".to_string(),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                "An internal error occurred".to_string()
            }
            ApiError::WebhookFailed(msg) => {
                tracing::error!("Webhook processing failed: {msg}");
                "Webhook processing failed".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
