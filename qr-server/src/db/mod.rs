//! Database Module
//!
//! Opens the embedded SurrealDB instance and applies the schema.

pub mod models;
pub mod repository;

use crate::core::Config;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// 表结构定义
///
/// `(restaurant_id, table_number)` 的唯一性由 UNIQUE 索引保证，
/// 并发生成同一桌台的二维码时只有一个写入成功。
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS qr_code SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS restaurant_id ON qr_code TYPE string;
DEFINE FIELD IF NOT EXISTS table_number ON qr_code TYPE string;
DEFINE FIELD IF NOT EXISTS qr_code_url ON qr_code TYPE string;
DEFINE FIELD IF NOT EXISTS created_at ON qr_code TYPE int;
DEFINE FIELD IF NOT EXISTS updated_at ON qr_code TYPE int;
DEFINE INDEX IF NOT EXISTS qr_code_restaurant_table ON qr_code FIELDS restaurant_id, table_number UNIQUE;
"#;

/// Database service (owns the SurrealDB handle)
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the database described by the config and apply the schema
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let connected = if config.is_memory_database() {
            Surreal::new::<Mem>(()).await
        } else {
            Surreal::new::<RocksDb>(config.database_path.as_str()).await
        };
        let db =
            connected.map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::prepare(db, &config.database_namespace, &config.database_name).await
    }

    /// In-memory database, used by tests
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::prepare(db, "test", "test").await
    }

    async fn prepare(db: Surreal<Db>, namespace: &str, database: &str) -> Result<Self, AppError> {
        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!(namespace, database, "Database schema applied");

        Ok(Self { db })
    }
}
