//! Table QR code issuance, lookup and deletion
//!
//! Every failure leaves this module as exactly one [`QrCodeError`] kind.
//! No operation retries; a failed storage call is reported immediately.

use std::cmp::Ordering;

use shared::models::{QrCode, QrCodeCreate};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::models::QrCodeRecord;
use crate::db::repository::{QrCodeRepository, RepoError};
use crate::services::qr_encoder::{QrEncodeError, QrEncoder};
use crate::utils::AppError;

#[derive(Debug, Error)]
pub enum QrCodeError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("QR code for this table already exists")]
    DuplicateTable,

    #[error("QR code {0} not found")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("QR encoding failed: {0}")]
    Encoding(#[from] QrEncodeError),
}

impl From<RepoError> for QrCodeError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(_) => QrCodeError::DuplicateTable,
            RepoError::NotFound(id) => QrCodeError::NotFound(id),
            RepoError::Conflict(msg) | RepoError::Database(msg) => QrCodeError::Storage(msg),
        }
    }
}

impl From<QrCodeError> for AppError {
    fn from(err: QrCodeError) -> Self {
        match err {
            QrCodeError::InvalidInput(msg) => AppError::validation(msg),
            QrCodeError::DuplicateTable => AppError::duplicate(err.to_string()),
            QrCodeError::NotFound(_) => AppError::not_found(err.to_string()),
            QrCodeError::Storage(msg) => AppError::database(msg),
            QrCodeError::Encoding(e) => AppError::internal(e.to_string()),
        }
    }
}

/// Table number ordering used by listings
///
/// Plain non-negative integers compare numerically and come first;
/// everything else compares by bytes. Equal numbers ("02" vs "2") fall
/// back to byte order so the ordering stays total.
pub fn compare_table_numbers(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[derive(Clone)]
pub struct QrCodeService {
    repo: QrCodeRepository,
    encoder: QrEncoder,
}

impl QrCodeService {
    pub fn new(db: Surreal<Db>, encoder: QrEncoder) -> Self {
        Self {
            repo: QrCodeRepository::new(db),
            encoder,
        }
    }

    /// Issue the QR code of one table
    ///
    /// Uniqueness is left to the storage index; there is no existence check
    /// before the insert.
    pub async fn issue(&self, payload: QrCodeCreate) -> Result<QrCode, QrCodeError> {
        let restaurant_id = payload
            .restaurant_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| QrCodeError::InvalidInput("restaurantId is required".to_string()))?
            .to_string();
        let table_number = payload
            .table_no
            .as_ref()
            .and_then(|t| t.label())
            .ok_or_else(|| {
                QrCodeError::InvalidInput(
                    "tableNo must be a non-empty label or a non-negative integer".to_string(),
                )
            })?;

        let qr_code_url = self.encoder.data_url(&restaurant_id, &table_number)?;
        let now = now_millis();

        let created = self
            .repo
            .create(QrCodeRecord {
                restaurant_id,
                table_number,
                qr_code_url,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            id = %created.id,
            restaurant_id = %created.restaurant_id,
            table_number = %created.table_number,
            "QR code issued"
        );
        Ok(created)
    }

    /// All QR codes of a restaurant, ascending by table number
    pub async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<QrCode>, QrCodeError> {
        let mut codes = self.repo.find_by_restaurant(restaurant_id).await?;
        codes.sort_by(|a, b| compare_table_numbers(&a.table_number, &b.table_number));
        Ok(codes)
    }

    pub async fn get(&self, id: &str) -> Result<QrCode, QrCodeError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| QrCodeError::NotFound(id.to_string()))
    }

    /// PNG rendering of a stored code, for printing
    pub async fn image(&self, id: &str) -> Result<Vec<u8>, QrCodeError> {
        let qr = self.get(id).await?;
        Ok(self.encoder.png(&qr.restaurant_id, &qr.table_number)?)
    }

    /// Returns the deleted id
    pub async fn delete(&self, id: &str) -> Result<String, QrCodeError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepoError::NotFound(_) => QrCodeError::NotFound(id.to_string()),
            other => other.into(),
        })?;
        tracing::info!(id, "QR code deleted");
        Ok(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(labels: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare_table_numbers(a, b));
        v
    }

    #[test]
    fn numeric_labels_sort_numerically() {
        assert_eq!(sorted(&["10", "2", "1"]), vec!["1", "2", "10"]);
    }

    #[test]
    fn numeric_labels_come_before_text() {
        assert_eq!(sorted(&["Bar", "3", "A1", "0"]), vec!["0", "3", "A1", "Bar"]);
    }

    #[test]
    fn equal_numbers_are_ordered_by_bytes() {
        assert_eq!(compare_table_numbers("02", "2"), Ordering::Less);
        assert_eq!(compare_table_numbers("2", "2"), Ordering::Equal);
    }

    #[test]
    fn repo_errors_map_to_one_kind_each() {
        assert!(matches!(
            QrCodeError::from(RepoError::Duplicate("idx".into())),
            QrCodeError::DuplicateTable
        ));
        assert!(matches!(
            QrCodeError::from(RepoError::Database("io".into())),
            QrCodeError::Storage(_)
        ));
        assert!(matches!(
            QrCodeError::from(RepoError::NotFound("x".into())),
            QrCodeError::NotFound(_)
        ));
    }

    #[test]
    fn duplicate_message_reaches_client() {
        let app: AppError = QrCodeError::DuplicateTable.into();
        assert!(matches!(
            app,
            AppError::Duplicate(ref msg) if msg == "QR code for this table already exists"
        ));
    }
}
