use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::services::{QrCodeService, QrEncoder};

/// 服务器状态 - 持有所有服务的共享句柄
///
/// 所有依赖都在这里显式构造并传入处理器，不存在进程级单例。
/// 字段均为廉价克隆的句柄。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | qr_encoder | QrEncoder | 二维码编码 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub jwt_service: Arc<JwtService>,
    pub qr_encoder: QrEncoder,
}

impl ServerState {
    /// 使用已打开的数据库构造状态
    ///
    /// 测试中传入内存数据库
    pub fn with_db(config: Config, db: Surreal<Db>) -> Result<Self> {
        let qr_encoder = QrEncoder::new(&config.qr_base_url)
            .map_err(|e| ServerError::Internal(anyhow::Error::new(e)))?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config,
            db,
            jwt_service,
            qr_encoder,
        })
    }

    /// 初始化服务器状态
    ///
    /// 1. 数据目录 (RocksDB 模式下确保父目录存在)
    /// 2. 数据库连接与表结构
    /// 3. 各服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        if !config.is_memory_database()
            && let Some(parent) = std::path::Path::new(&config.database_path).parent()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ServerError::Database(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let db_service = DbService::new(config).await?;
        tracing::info!(path = %config.database_path, "Database ready");

        Self::with_db(config.clone(), db_service.db)
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// QR 服务 (每次请求构造，只克隆句柄)
    pub fn qr_code_service(&self) -> QrCodeService {
        QrCodeService::new(self.db.clone(), self.qr_encoder.clone())
    }
}
