//! HTTP mapping for account errors.
//!
//! The original service answered 200 for every logical failure and signaled
//! errors only through the message text. We keep the exact message wording
//! but attach proper status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::domains::account::AccountError;

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = match &self {
            AccountError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::UserNotFound => StatusCode::NOT_FOUND,
            AccountError::UserExists | AccountError::AlreadyRegistered => StatusCode::CONFLICT,
            AccountError::Storage(source) => {
                error!(error = %source, "Storage operation failed");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
