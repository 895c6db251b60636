//! Repository Module
//!
//! Persistence adapters over the SurrealDB handle.

pub mod qr_code;

pub use qr_code::QrCodeRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// 事务提交冲突 (并发写入同一索引键)，可重试
    #[error("Transaction conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        use surrealdb::error::Db;

        let message = err.to_string();
        match err {
            surrealdb::Error::Db(Db::IndexExists { .. }) => RepoError::Duplicate(message),
            // 提交阶段的冲突被包装成 QueryNotExecutedDetail 返回
            surrealdb::Error::Db(
                Db::TxRetryable
                | Db::TxKeyAlreadyExists
                | Db::QueryNotExecuted
                | Db::QueryNotExecutedDetail { .. },
            ) => RepoError::Conflict(message),
            _ => RepoError::Database(message),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::error::Db;

    #[test]
    fn commit_conflicts_are_classified() {
        let retryable = RepoError::from(surrealdb::Error::Db(Db::TxRetryable));
        assert!(matches!(retryable, RepoError::Conflict(_)));

        let not_executed = RepoError::from(surrealdb::Error::Db(Db::QueryNotExecutedDetail {
            message: "Failed to commit transaction due to a read or write conflict".to_string(),
        }));
        assert!(matches!(not_executed, RepoError::Conflict(_)));

        let other = RepoError::from(surrealdb::Error::Db(Db::QueryTimedout));
        assert!(matches!(other, RepoError::Database(_)));
    }
}
