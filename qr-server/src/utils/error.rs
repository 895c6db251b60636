//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`ErrorBody`] - API 错误响应结构
//!
//! # 错误码规范
//!
//! | 错误码 | HTTP | 说明 |
//! |--------|------|------|
//! | E0002 | 400 | 参数缺失或无效 |
//! | E0003 | 404 | 资源不存在 |
//! | E0004 | 400 | 桌台二维码已存在 |
//! | E2001 | 403 | 无权限 |
//! | E3001 | 401 | 未登录 |
//! | E3002 | 401 | 无效令牌 |
//! | E3003 | 401 | 令牌过期 |
//! | E9001 | 500 | 内部错误 |
//! | E9002 | 500 | 数据库错误 |
//!
//! # 使用示例
//!
//! ```ignore
//! Err(AppError::not_found("QR code abc not found"))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// API 错误响应结构
///
/// ```json
/// {
///   "code": "E0004",
///   "message": "QR code for this table already exists"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 错误码
    pub code: String,
    /// 消息
    pub message: String,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (4xx) ==========
    #[error("Authentication required")]
    /// 未登录 (401)
    Unauthorized,

    #[error("Token expired")]
    /// 令牌过期 (401)
    TokenExpired,

    #[error("Invalid token: {0}")]
    /// 无效令牌 (401)
    InvalidToken(String),

    #[error("Permission denied: {0}")]
    /// 无权限 (403)
    Forbidden(String),

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Duplicate resource: {0}")]
    /// 唯一约束冲突 (400)
    Duplicate(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn token_expired() -> Self {
        Self::TokenExpired
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::TokenExpired | AppError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Duplicate(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 错误码字符串
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "E3001",
            AppError::InvalidToken(_) => "E3002",
            AppError::TokenExpired => "E3003",
            AppError::Forbidden(_) => "E2001",
            AppError::NotFound(_) => "E0003",
            AppError::Duplicate(_) => "E0004",
            AppError::Validation(_) => "E0002",
            AppError::Internal(_) => "E9001",
            AppError::Database(_) => "E9002",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let message = match &self {
            AppError::Unauthorized => "Please login first".to_string(),
            AppError::TokenExpired => "Token expired".to_string(),
            AppError::InvalidToken(_) => "Invalid token".to_string(),
            AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Duplicate(msg)
            | AppError::Validation(msg) => msg.clone(),

            // 服务端错误只记录日志，不向调用方暴露细节
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorBody {
            code: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            AppError::validation("restaurantId is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::duplicate("exists").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::unauthorized().status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn duplicate_is_distinguishable_from_validation() {
        assert_ne!(
            AppError::duplicate("x").code(),
            AppError::validation("x").code()
        );
    }

    #[test]
    fn server_errors_map_to_500() {
        let response = AppError::database("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::internal("encoder blew up").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
