use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;

/// Largest JSON request body accepted when nothing else is configured (2 MiB).
pub const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 2 * 1024 * 1024;

/// Shared, read-only application state handed to every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// `None` only in tests that exercise paths without storage
    pub db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    /// Bytes; larger JSON bodies are refused with 413
    pub max_json_payload_size: usize,
    pub app_version: &'static str,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
            max_json_payload_size: DEFAULT_MAX_JSON_PAYLOAD_SIZE,
            app_version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn with_max_json_payload_size(mut self, limit: usize) -> Self {
        self.max_json_payload_size = limit;
        self
    }

    pub fn without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            security,
            max_json_payload_size: DEFAULT_MAX_JSON_PAYLOAD_SIZE,
            app_version: env!("CARGO_PKG_VERSION"),
        }
    }
}
