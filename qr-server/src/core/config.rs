use crate::auth::JwtConfig;

/// 数据库路径取该值时使用内存存储
pub const MEMORY_DATABASE: &str = "memory";

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | ./data/qr.db | RocksDB 目录 (`memory` 为内存模式) |
/// | DATABASE_NAMESPACE | restaurant | SurrealDB namespace |
/// | DATABASE_NAME | pos | SurrealDB database |
/// | QR_BASE_URL | http://localhost:3000 | 二维码内容的 URL 前缀 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录 (设置后按天滚动写文件) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | ENVIRONMENT | development | 运行环境 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=memory HTTP_PORT=8080 cargo run -p qr-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    /// RocksDB 数据目录
    pub database_path: String,
    pub database_namespace: String,
    pub database_name: String,
    /// 二维码编码的桌台 URL 前缀
    pub qr_base_url: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// JWT 认证配置
    pub jwt: JwtConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/qr.db".into()),
            database_namespace: std::env::var("DATABASE_NAMESPACE")
                .unwrap_or_else(|_| "restaurant".into()),
            database_name: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "pos".into()),
            qr_base_url: std::env::var("QR_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            jwt: JwtConfig::default(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// 监听地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 是否内存数据库
    pub fn is_memory_database(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
