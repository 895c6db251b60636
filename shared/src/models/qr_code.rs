//! Table QR Code Model

use serde::{Deserialize, Serialize};

/// Table QR code (桌台二维码)
///
/// Normalized representation returned to every caller. Storage record ids
/// never appear here; `id` is the bare key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub id: String,
    pub restaurant_id: String,
    pub table_number: String,
    /// PNG data URL (`data:image/png;base64,...`)
    pub qr_code_url: String,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis
    pub updated_at: i64,
}

/// Table number as sent by clients
///
/// Dashboards send either a JSON number or a string label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableNo {
    Number(serde_json::Number),
    Text(String),
}

impl TableNo {
    /// Canonical string label
    ///
    /// `None` when the label is blank or the number is not a non-negative
    /// integer. `0` is a valid table number and `5.0` names table `5`.
    pub fn label(&self) -> Option<String> {
        match self {
            TableNo::Number(n) => match n.as_u64() {
                Some(v) => Some(v.to_string()),
                None => n
                    .as_f64()
                    .filter(|f| {
                        f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64
                    })
                    .map(|f| (f as u64).to_string()),
            },
            TableNo::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }
}

impl From<&str> for TableNo {
    fn from(value: &str) -> Self {
        TableNo::Text(value.to_string())
    }
}

impl From<u32> for TableNo {
    fn from(value: u32) -> Self {
        TableNo::Number(value.into())
    }
}

/// Create QR code payload
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeCreate {
    #[serde(default)]
    pub restaurant_id: Option<String>,
    #[serde(default, alias = "tableNumber")]
    pub table_no: Option<TableNo>,
}

impl QrCodeCreate {
    pub fn new(restaurant_id: impl Into<String>, table_no: impl Into<TableNo>) -> Self {
        Self {
            restaurant_id: Some(restaurant_id.into()),
            table_no: Some(table_no.into()),
        }
    }
}

/// Delete confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_label(json: &str) -> Option<String> {
        let table: TableNo = serde_json::from_str(json).unwrap();
        table.label()
    }

    #[test]
    fn integral_float_names_same_table() {
        assert_eq!(number_label("5").as_deref(), Some("5"));
        assert_eq!(number_label("5.0").as_deref(), Some("5"));
        assert_eq!(number_label("0.0").as_deref(), Some("0"));
    }

    #[test]
    fn negative_and_fractional_numbers_have_no_label() {
        assert_eq!(number_label("-1"), None);
        assert_eq!(number_label("2.5"), None);
        assert_eq!(number_label("-0.5"), None);
    }

    #[test]
    fn deserialize_numeric_zero_table() {
        let payload: QrCodeCreate =
            serde_json::from_str(r#"{"restaurantId":"r1","tableNo":0}"#).unwrap();
        assert_eq!(payload.table_no.unwrap().label().as_deref(), Some("0"));
    }

    #[test]
    fn deserialize_string_table_is_trimmed() {
        let payload: QrCodeCreate =
            serde_json::from_str(r#"{"restaurantId":"r1","tableNo":" 12 "}"#).unwrap();
        assert_eq!(payload.table_no.unwrap().label().as_deref(), Some("12"));
    }

    #[test]
    fn null_and_missing_table_are_absent() {
        let payload: QrCodeCreate =
            serde_json::from_str(r#"{"restaurantId":"r1","tableNo":null}"#).unwrap();
        assert!(payload.table_no.is_none());

        let payload: QrCodeCreate = serde_json::from_str(r#"{"restaurantId":"r1"}"#).unwrap();
        assert!(payload.table_no.is_none());
    }

    #[test]
    fn blank_label_is_rejected() {
        assert_eq!(TableNo::from("   ").label(), None);
    }

    #[test]
    fn boolean_table_fails_to_deserialize() {
        let result = serde_json::from_str::<QrCodeCreate>(r#"{"restaurantId":"r1","tableNo":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn table_number_alias_is_accepted() {
        let payload: QrCodeCreate =
            serde_json::from_str(r#"{"restaurantId":"r1","tableNumber":"A3"}"#).unwrap();
        assert_eq!(payload.table_no.unwrap().label().as_deref(), Some("A3"));
    }

    #[test]
    fn qr_code_serializes_camel_case() {
        let qr = QrCode {
            id: "abc".to_string(),
            restaurant_id: "r1".to_string(),
            table_number: "5".to_string(),
            qr_code_url: "data:image/png;base64,AAAA".to_string(),
            created_at: 1,
            updated_at: 1,
        };
        let value = serde_json::to_value(&qr).unwrap();
        assert_eq!(value["restaurantId"], "r1");
        assert_eq!(value["tableNumber"], "5");
        assert_eq!(value["qrCodeUrl"], "data:image/png;base64,AAAA");
        assert!(value.get("restaurant_id").is_none());
    }
}
