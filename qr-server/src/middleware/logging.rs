//! 请求日志中间件
//!
//! 记录所有进入的 HTTP 请求，包含用户信息、状态码和延迟

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

use crate::auth::CurrentUser;

/// 请求日志中间件
///
/// 日志字段：request_id (x-request-id 或新生成)、method、path、user、status、latency_ms。
/// 放在认证中间件外层，401 拒绝也会记录；用户信息取自响应扩展 (由认证中间件写入)。
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let user = response
        .extensions()
        .get::<CurrentUser>()
        .map(|u| format!("{}({})", u.username, u.id));

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    if status.is_server_error() {
        warn!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            user = ?user,
            status = status.as_u16(),
            latency_ms,
            "Request failed"
        );
    } else {
        info!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            user = ?user,
            status = status.as_u16(),
            latency_ms,
            "Request completed"
        );
    }

    response
}
