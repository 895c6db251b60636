//! Shared helpers for integration tests

#![allow(dead_code)]

use qr_server::auth::{JwtConfig, JwtService};
use qr_server::core::config::MEMORY_DATABASE;
use qr_server::db::DbService;
use qr_server::{Config, ServerState};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-at-least-32-chars".to_string(),
        expiration_minutes: 10,
        issuer: "test-issuer".to_string(),
        audience: "test-audience".to_string(),
    }
}

pub fn test_config() -> Config {
    let mut config = Config::with_overrides(MEMORY_DATABASE, 0);
    config.qr_base_url = "https://menu.example.com".to_string();
    config.jwt = test_jwt_config();
    config
}

/// Server state over a fresh in-memory database
pub async fn memory_state() -> ServerState {
    let db = DbService::memory().await.expect("in-memory database");
    ServerState::with_db(test_config(), db.db).expect("server state")
}

/// Bearer token carrying the given permissions
pub fn token(role: &str, permissions: &[&str]) -> String {
    let jwt = JwtService::with_config(test_jwt_config());
    let permissions: Vec<String> = permissions.iter().map(|p| p.to_string()).collect();
    jwt.generate_token("u-1", "tester", role, &permissions)
        .expect("token")
}
