//! API 路由模块
//!
//! - [`health`] - 健康检查 (无需认证)
//! - [`qr_codes`] - 桌台二维码接口

pub mod health;
pub mod qr_codes;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::ServerState;
use crate::middleware::logging_middleware;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(qr_codes::router())
}

/// Full application: routes, auth gate and tower-http layers, bound to state
pub fn app(state: ServerState) -> Router {
    build_app()
        // JWT 认证 - require_auth 内部跳过非 /api 路由
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        // 访问日志包在认证外层，拒绝的请求同样留痕
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}
