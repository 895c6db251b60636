//! Database row types

pub mod qr_code;

pub use qr_code::{QrCodeRecord, QrCodeRow};
