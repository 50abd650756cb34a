use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::{AppState, DEFAULT_MAX_JSON_PAYLOAD_SIZE};
use crate::state::security_config::SecurityConfig;

/// Builder for [`AppState`], shared by `main` and the test harness.
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_url: Option<String>,
    max_json_payload_size: usize,
}

impl StateBuilder {
    pub fn new(security_config: SecurityConfig) -> Self {
        Self {
            security_config,
            db_url: None,
            max_json_payload_size: DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        }
    }

    /// Connect to `url` and migrate during [`build`](Self::build).
    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    pub fn with_max_json_payload_size(mut self, limit: usize) -> Self {
        self.max_json_payload_size = limit;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let state = match self.db_url {
            Some(url) => {
                let conn = bootstrap_db(&url).await?;
                AppState::new(conn, self.security_config)
            }
            None => AppState::without_db(self.security_config),
        };
        Ok(state.with_max_json_payload_size(self.max_json_payload_size))
    }
}

pub fn build_state(security_config: SecurityConfig) -> StateBuilder {
    StateBuilder::new(security_config)
}
