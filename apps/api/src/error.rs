use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use newwork_core::AppError;
use serde::Serialize;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    pub error: String,
    /// Permission wire values the caller lacked. Omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        tracing::debug!(rejection = %value.body_text(), "request body rejected");
        Self(AppError::Validation("Invalid request body".to_owned()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, payload) = match self.0 {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message_only(message)),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message_only(message)),
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message_only(message)),
            AppError::Forbidden { message, required } => (
                StatusCode::FORBIDDEN,
                ErrorResponse {
                    error: message,
                    required,
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message_only("Internal server error".to_owned()),
                )
            }
        };

        (status, Json(payload)).into_response()
    }
}

fn message_only(error: String) -> ErrorResponse {
    ErrorResponse {
        error,
        required: Vec::new(),
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;
