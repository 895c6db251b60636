//! QR image encoding
//!
//! Turns a table's canonical URL into a scannable PNG. The same
//! `(restaurant_id, table_number)` always yields the same image.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Luma};
use thiserror::Error;
use url::Url;

/// 最小边长 (像素)，保证打印到桌卡上仍可扫描
const MIN_DIMENSION: u32 = 256;

#[derive(Debug, Error)]
pub enum QrEncodeError {
    #[error("Invalid QR base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("QR payload rejected: {0}")]
    Payload(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

#[derive(Debug, Clone)]
pub struct QrEncoder {
    base_url: Url,
}

impl QrEncoder {
    /// `base_url` must be an absolute URL that can carry path segments
    pub fn new(base_url: &str) -> Result<Self, QrEncodeError> {
        let parsed =
            Url::parse(base_url).map_err(|_| QrEncodeError::InvalidBaseUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(QrEncodeError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { base_url: parsed })
    }

    /// Canonical identifier of a table: `{base}/r/{restaurant}/t/{table}`
    ///
    /// Segments are percent-encoded, so labels like `"A/1"` stay one segment.
    pub fn table_url(&self, restaurant_id: &str, table_number: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["r", restaurant_id, "t", table_number]);
        }
        url
    }

    /// Raw PNG bytes for a table
    pub fn png(&self, restaurant_id: &str, table_number: &str) -> Result<Vec<u8>, QrEncodeError> {
        let content = self.table_url(restaurant_id, table_number);
        let code = qrcode::QrCode::new(content.as_str().as_bytes())?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
            .build();

        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }

    /// PNG as a `data:image/png;base64,...` URL
    pub fn data_url(
        &self,
        restaurant_id: &str,
        table_number: &str,
    ) -> Result<String, QrEncodeError> {
        let png = self.png(restaurant_id, table_number)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }
}
