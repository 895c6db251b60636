//! 业务服务
//!
//! - [`QrCodeService`] - 桌台二维码生成、查询、删除
//! - [`QrEncoder`] - 桌台 URL → PNG / data URL

pub mod qr_code;
pub mod qr_encoder;

pub use qr_code::{QrCodeError, QrCodeService, compare_table_numbers};
pub use qr_encoder::{QrEncodeError, QrEncoder};
