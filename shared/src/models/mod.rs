//! Data models
//!
//! Shared between qr-server and frontend (via API).
//! Field names are camelCase on the wire.

pub mod qr_code;

// Re-exports
pub use qr_code::*;
