use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Domain errors surfaced at the request boundary.
///
/// Every variant maps to exactly one status code; `Internal` is logged with
/// full detail and returns an opaque message to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized(String),

    #[error("forbidden")]
    Forbidden,

    #[error("validation: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InvariantViolation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return ApiError::Conflict("Email already in use by another account.".into());
            }
        }
        ApiError::Internal(e.into())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn status_codes_match_taxonomy() {
        let cases = [
            (
                ApiError::Unauthorized("no token".into()).into_response(),
                StatusCode::UNAUTHORIZED,
            ),
            (ApiError::Forbidden.into_response(), StatusCode::FORBIDDEN),
            (
                ApiError::Validation("bad".into()).into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Conflict("dup".into()).into_response(),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::InvariantViolation("last admin".into()).into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::NotFound("gone".into()).into_response(),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Internal(anyhow::anyhow!("boom")).into_response(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (response, expected) in cases {
            assert_eq!(response.status(), expected);
        }
    }

    #[tokio::test]
    async fn internal_error_body_is_opaque() {
        let response = ApiError::Internal(anyhow::anyhow!("secret detail")).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("secret detail"));
        assert!(text.contains("Internal Server Error"));
    }
}
