use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, format!("validation failed: {errors}"))
            }
            AppError::MalformedBody(detail) => (StatusCode::BAD_REQUEST, detail.clone()),
            AppError::Store(e) => {
                tracing::error!("store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn response_status(err: AppError) -> StatusCode {
        let response = err.into_response();
        response.status()
    }

    #[test]
    fn malformed_body_returns_400() {
        assert_eq!(
            response_status(AppError::MalformedBody("bad json".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn validation_failure_returns_400() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("email", validator::ValidationError::new("email"));
        assert_eq!(
            response_status(AppError::Validation(errors)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn store_failure_returns_500() {
        assert_eq!(
            response_status(AppError::Store(StoreError::Unavailable("down".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_detail_is_not_leaked_to_the_client() {
        let response =
            AppError::Store(StoreError::Operation("secret dsn".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
