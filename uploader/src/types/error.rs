//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::items::ItemError;

/// API error response envelope
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Whether the client should retry the request
    pub allow_retry: bool,
    /// Error details
    error: ErrorBody,
}

/// Error body containing code and message
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable error message
    pub message: &'static str,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(
        status: StatusCode,
        code: &'static str,
        msg: &'static str,
        retry: bool,
    ) -> Self {
        Self {
            status,
            inner: ApiErrorResponse {
                allow_retry: retry,
                error: ErrorBody { code, message: msg },
            },
        }
    }

    /// HTTP status of the error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.inner.error.code
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.status.as_u16() {
            400..=499 => tracing::warn!(
                "Client error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            500..=599 => tracing::error!(
                "Server error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert item processing errors to application errors
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match &err {
            ItemError::MissingId => Self::new(
                StatusCode::BAD_REQUEST,
                "missing_id",
                "Item id must not be empty",
                false,
            ),
            ItemError::Marshal(e) => {
                tracing::error!("Failed to serialize item: {e}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                    false,
                )
            }
            ItemError::Put(e) if e.is_upstream() => {
                tracing::error!("Object store upstream error: {e}");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "upstream_error",
                    "Storage service temporarily unavailable",
                    true,
                )
            }
            ItemError::Put(e) => {
                tracing::error!("Object store error: {e}");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    "storage_error",
                    "Failed to store item",
                    true,
                )
            }
        }
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_store::ObjectStoreError;

    #[test]
    fn test_item_error_status_mapping() {
        let cases = [
            (ItemError::MissingId, StatusCode::BAD_REQUEST, "missing_id"),
            (
                ItemError::Put(ObjectStoreError::UpstreamError("503".into())),
                StatusCode::SERVICE_UNAVAILABLE,
                "upstream_error",
            ),
            (
                ItemError::Put(ObjectStoreError::S3Error("NoSuchBucket".into())),
                StatusCode::BAD_GATEWAY,
                "storage_error",
            ),
            (
                ItemError::Put(ObjectStoreError::Other("boom".into())),
                StatusCode::BAD_GATEWAY,
                "storage_error",
            ),
        ];

        for (err, status, code) in cases {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status(), status);
            assert_eq!(app_err.code(), code);
        }
    }

    #[test]
    fn test_error_envelope_shape() {
        let app_err = AppError::new(StatusCode::BAD_GATEWAY, "storage_error", "nope", true);
        let json = serde_json::to_value(&app_err.inner).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "allowRetry": true,
                "error": { "code": "storage_error", "message": "nope" }
            })
        );
    }
}
