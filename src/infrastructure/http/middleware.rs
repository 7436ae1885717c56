//! HTTP Middleware
//!
//! 按响应状态码记录请求日志

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 毫秒数超出 u64 时取 u64::MAX
fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// 状态码日志中间件
///
/// 5xx 记 error，4xx 记 warn，其余记 debug
/// 注意：本 API 的业务失败都以 404 返回，因此 4xx 在这里很常见
pub async fn status_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = elapsed_ms(started);

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn created_handler() -> StatusCode {
        StatusCode::CREATED
    }

    async fn not_found_handler() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/created", get(created_handler))
            .route("/not-found", get(not_found_handler))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(status_logging_middleware))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[test]
    fn test_elapsed_ms_for_recent_start() {
        let started = Instant::now();
        assert!(elapsed_ms(started) < 60_000);
    }

    #[tokio::test]
    async fn test_status_passes_through_unchanged() {
        assert_eq!(status_of("/created").await, StatusCode::CREATED);
        assert_eq!(status_of("/not-found").await, StatusCode::NOT_FOUND);
        assert_eq!(
            status_of("/error").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
