//! Table QR Code Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{QrCodeRecord, QrCodeRow};
use shared::models::QrCode;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "qr_code";

/// 提交冲突后重新插入的次数上限
const MAX_CONFLICT_RETRIES: u32 = 3;

#[derive(Clone)]
pub struct QrCodeRepository {
    base: BaseRepository,
}

impl QrCodeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all QR codes of a restaurant
    ///
    /// Rows come back in storage order; callers apply the table ordering.
    pub async fn find_by_restaurant(&self, restaurant_id: &str) -> RepoResult<Vec<QrCode>> {
        let rows: Vec<QrCodeRow> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, restaurant_id, table_number, qr_code_url, \
                 created_at, updated_at FROM qr_code WHERE restaurant_id = $restaurant_id",
            )
            .bind(("restaurant_id", restaurant_id.to_string()))
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(QrCode::from).collect())
    }

    /// Find QR code by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<QrCode>> {
        let record: Option<QrCodeRecord> =
            self.base.db().select((TABLE, id.to_string())).await?;
        Ok(record.map(|r| r.into_qr_code(id)))
    }

    /// Find the QR code of one table, if issued
    pub async fn find_by_table(
        &self,
        restaurant_id: &str,
        table_number: &str,
    ) -> RepoResult<Option<QrCode>> {
        let mut rows: Vec<QrCodeRow> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, restaurant_id, table_number, qr_code_url, \
                 created_at, updated_at FROM qr_code \
                 WHERE restaurant_id = $restaurant_id AND table_number = $table_number LIMIT 1",
            )
            .bind(("restaurant_id", restaurant_id.to_string()))
            .bind(("table_number", table_number.to_string()))
            .await?
            .take(0)?;
        Ok(rows.pop().map(QrCode::from))
    }

    /// Insert a new QR code under a freshly generated id
    ///
    /// A second record for the same `(restaurant_id, table_number)` is
    /// rejected by the UNIQUE index and surfaces as [`RepoError::Duplicate`].
    /// 并发提交冲突时查询该桌台：已被其他请求写入则同样返回 Duplicate，
    /// 否则重试插入 (最多 [`MAX_CONFLICT_RETRIES`] 次)。
    pub async fn create(&self, data: QrCodeRecord) -> RepoResult<QrCode> {
        let mut attempt = 0;
        loop {
            match self.insert(data.clone()).await {
                Err(RepoError::Conflict(message)) => {
                    if self
                        .find_by_table(&data.restaurant_id, &data.table_number)
                        .await?
                        .is_some()
                    {
                        return Err(RepoError::Duplicate(message));
                    }
                    attempt += 1;
                    if attempt >= MAX_CONFLICT_RETRIES {
                        return Err(RepoError::Conflict(message));
                    }
                    tracing::debug!(attempt, "Retrying QR code insert after conflict");
                }
                result => return result,
            }
        }
    }

    async fn insert(&self, data: QrCodeRecord) -> RepoResult<QrCode> {
        let id = uuid::Uuid::new_v4().to_string();
        let created: Option<QrCodeRecord> = self
            .base
            .db()
            .create((TABLE, id.clone()))
            .content(data)
            .await?;
        created
            .map(|r| r.into_qr_code(id))
            .ok_or_else(|| RepoError::Database("Failed to create QR code".to_string()))
    }

    /// Hard delete a QR code
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let deleted: Option<QrCodeRecord> =
            self.base.db().delete((TABLE, id.to_string())).await?;
        match deleted {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound(format!("QR code {} not found", id))),
        }
    }
}
