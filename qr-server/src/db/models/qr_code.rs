//! Table QR Code Model (storage)

use serde::{Deserialize, Serialize};
use shared::models::QrCode;

/// Stored fields of a `qr_code` record
///
/// The record id lives in the SurrealDB record key and is not part of the
/// content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeRecord {
    pub restaurant_id: String,
    pub table_number: String,
    pub qr_code_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl QrCodeRecord {
    /// Attach the record key, producing the normalized record
    pub fn into_qr_code(self, id: impl Into<String>) -> QrCode {
        QrCode {
            id: id.into(),
            restaurant_id: self.restaurant_id,
            table_number: self.table_number,
            qr_code_url: self.qr_code_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Query row with the record key projected as a plain string
/// (`record::id(id) AS id`)
#[derive(Debug, Clone, Deserialize)]
pub struct QrCodeRow {
    pub id: String,
    pub restaurant_id: String,
    pub table_number: String,
    pub qr_code_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<QrCodeRow> for QrCode {
    fn from(row: QrCodeRow) -> Self {
        QrCode {
            id: row.id,
            restaurant_id: row.restaurant_id,
            table_number: row.table_number,
            qr_code_url: row.qr_code_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
