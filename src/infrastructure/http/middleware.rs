//! HTTP Middleware
//!
//! 按状态码记录错误响应

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 错误响应日志中间件
///
/// 4xx 记为 warn，5xx 记为 error。`ApiError` 自身另外记录错误原因，
/// 这里补充的是方法、路径和耗时，也覆盖 axum 提取器直接拒绝的请求。
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
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
    }

    response
}
