//! QR Server - 餐厅桌台二维码服务
//!
//! # 架构概述
//!
//! 为每家餐厅的每张桌台签发唯一的二维码，提供查询、图片渲染和删除。
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB，唯一索引保证 (restaurant_id, table_number) 唯一
//! - **业务服务** (`services`): 二维码签发/查询/删除、PNG 编码
//! - **认证** (`auth`): JWT 认证网关与权限检查
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! qr-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── auth/          # JWT 认证、权限
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── services/      # 二维码业务
//! ├── db/            # 数据库层
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::{QrCodeError, QrCodeService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 加载 .env (若存在)
///
/// 必须在 [`Config::from_env`] 之前调用
pub fn setup_environment() {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {}", e);
    }
}

pub fn print_banner() {
    println!(
        r#"
  ___  ____    ____
 / _ \|  _ \  / ___|  ___ _ ____   _____ _ __
| | | | |_) | \___ \ / _ \ '__\ \ / / _ \ '__|
| |_| |  _ <   ___) |  __/ |   \ V /  __/ |
 \__\_\_| \_\ |____/ \___|_|    \_/ \___|_|
    "#
    );
}
