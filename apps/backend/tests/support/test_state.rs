use backend_test_support::unique_helpers::unique_str;
use taskline_backend::infra::state::build_state;
use taskline_backend::{AppError, AppState, SecurityConfig};

/// Security config shared by a test and the app under test.
pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(unique_str("integration-secret").into_bytes())
}

/// Fresh, migrated in-memory SQLite database per call.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_test_state_with(test_security()).await
}

pub async fn build_test_state_with(security: SecurityConfig) -> Result<AppState, AppError> {
    build_state(security)
        .with_db_url("sqlite::memory:")
        .build()
        .await
}

/// Migrated in-memory state with a custom JSON body limit.
pub async fn build_test_state_with_body_limit(limit: usize) -> Result<AppState, AppError> {
    build_state(test_security())
        .with_db_url("sqlite::memory:")
        .with_max_json_payload_size(limit)
        .build()
        .await
}

/// State with no database; every storage-backed route answers 503.
pub async fn build_state_without_db() -> Result<AppState, AppError> {
    build_state(test_security()).build().await
}
