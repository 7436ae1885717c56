//! HTTP Error Handling
//!
//! 所有失败统一返回 404 + `{"message": "..."}`，
//! 客户端只能通过 message 文本区分失败原因

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::MessageResponse;
use crate::application::ApplicationError;
use crate::domain::movie::MovieError;

/// API 错误
///
/// 变体只影响日志级别，不影响响应状态码
#[derive(Debug)]
pub enum ApiError {
    /// 资源不存在
    NotFound(String),
    /// 缺少参数、参数格式错误、请求体无效
    BadRequest(String),
    /// 存储层失败
    Internal(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Storage failure");
            }
        }

        let body = MessageResponse::new(self.message());
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} not found: {}", resource_type, id))
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(e: MovieError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::MovieId;

    #[tokio::test]
    async fn test_every_error_is_404_with_message() {
        let errors = vec![
            ApiError::NotFound("missing".to_string()),
            ApiError::BadRequest("bad".to_string()),
            ApiError::Internal("db down".to_string()),
        ];

        for error in errors {
            let expected = error.message().to_string();
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, serde_json::json!({ "message": expected }));
        }
    }

    #[test]
    fn test_application_error_mapping() {
        let id = MovieId::new();
        let error = ApiError::from(ApplicationError::not_found("Movie", id));
        assert!(matches!(&error, ApiError::NotFound(_)));
        assert_eq!(error.message(), format!("Movie not found: {}", id));

        let error = ApiError::from(ApplicationError::RepositoryError("locked".to_string()));
        assert!(matches!(error, ApiError::Internal(_)));

        let error = ApiError::from(MovieError::EmptyId);
        assert_eq!(error.message(), "Movie ID cannot be empty");
    }
}
