//! Permission Definitions

/// 查看桌台二维码
pub const QR_CODES_READ: &str = "qrcodes:read";

/// 生成、删除桌台二维码
pub const QR_CODES_MANAGE: &str = "qrcodes:manage";
