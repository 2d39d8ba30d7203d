//! HTTP Middleware
//!
//! 按状态码分级的访问日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 访问日志中间件
///
/// - 5xx: error
/// - 4xx: warn
/// - 其余: debug
///
/// 业务错误的详情在 ApiError::into_response() 中记录
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

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
            "HTTP request served"
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
        routing::{get, post},
        Router,
    };
    use tower::util::ServiceExt;

    async fn created() -> StatusCode {
        StatusCode::CREATED
    }

    async fn conflict() -> StatusCode {
        StatusCode::CONFLICT
    }

    async fn broken() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn app() -> Router {
        Router::new()
            .route("/created", post(created))
            .route("/conflict", post(conflict))
            .route("/broken", get(broken))
            .layer(axum::middleware::from_fn(access_log_middleware))
    }

    async fn call(method: &str, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_status_passes_through_unchanged() {
        assert_eq!(call("POST", "/created").await, StatusCode::CREATED);
        assert_eq!(call("POST", "/conflict").await, StatusCode::CONFLICT);
        assert_eq!(call("GET", "/broken").await, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unrouted_and_wrong_method_statuses() {
        assert_eq!(call("GET", "/nowhere").await, StatusCode::NOT_FOUND);
        assert_eq!(call("GET", "/created").await, StatusCode::METHOD_NOT_ALLOWED);
    }
}
