//! Shared types for the table QR service
//!
//! Wire types exchanged between the server and its clients (dashboard,
//! POS terminals), plus small utility helpers.

pub mod models;
pub mod util;

// Re-exports
pub use models::{DeletedResponse, QrCode, QrCodeCreate, TableNo};
pub use serde::{Deserialize, Serialize};
