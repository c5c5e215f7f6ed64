use apiward_core::AppError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;
use ts_rs::TS;

/// Message returned for every internal failure. The cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "We are unable to complete this request. Please try again or contact support.";

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    code: &'static str,
    message: String,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let message = match &self.0 {
            AppError::Internal(detail) => {
                error!(error = %detail, "request failed with internal error");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
            other => other.message().to_owned(),
        };

        (status, Json(ErrorResponse { code, message })).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use apiward_core::AppError;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::{ApiError, INTERNAL_ERROR_MESSAGE};

    async fn body_text(error: AppError) -> (StatusCode, String) {
        let response = ApiError(error).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await;
        let text = bytes
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default();
        (status, text)
    }

    #[tokio::test]
    async fn internal_errors_never_leak_details() {
        let (status, body) = body_text(AppError::Internal(
            "failed to append audit event: relation does not exist".to_owned(),
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains(INTERNAL_ERROR_MESSAGE));
        assert!(!body.contains("relation"));
    }

    #[tokio::test]
    async fn validation_errors_name_the_offending_value() {
        let (status, body) = body_text(AppError::Validation(
            "invalid IP address 'not-an-ip': invalid IP address syntax".to_owned(),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("not-an-ip"));
        assert!(body.contains("validation_error"));
    }

    #[tokio::test]
    async fn forbidden_and_not_found_use_distinct_statuses() {
        let (forbidden, _) = body_text(AppError::Forbidden("upgrade".to_owned())).await;
        let (not_found, _) = body_text(AppError::NotFound("missing".to_owned())).await;

        assert_eq!(forbidden, StatusCode::FORBIDDEN);
        assert_eq!(not_found, StatusCode::NOT_FOUND);
    }
}
