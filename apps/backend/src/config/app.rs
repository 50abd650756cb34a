//! Process configuration, resolved once from the environment at startup.

use std::time::Duration;

use crate::error::AppError;
use crate::state::app_state::DEFAULT_MAX_JSON_PAYLOAD_SIZE;
use crate::state::security_config::{SecurityConfig, DEFAULT_TOKEN_TTL};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://taskline.db?mode=rwc";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:4200";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub cors_allowed_origins: Vec<String>,
    /// Bytes
    pub max_json_payload_size: usize,
    pub security: SecurityConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, so tests never touch the process env.
    ///
    /// `BACKEND_JWT_SECRET` is required and must be non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        let jwt_secret =
            var("BACKEND_JWT_SECRET").ok_or_else(|| AppError::config("BACKEND_JWT_SECRET must be set"))?;

        let token_ttl = match var("BACKEND_TOKEN_TTL_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(AppError::config(format!(
                        "BACKEND_TOKEN_TTL_SECS must be a positive integer, got '{raw}'"
                    )))
                }
            },
            None => DEFAULT_TOKEN_TTL,
        };

        let database_url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        let max_json_payload_size = match var("BACKEND_MAX_JSON_PAYLOAD_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => {
                    return Err(AppError::config(format!(
                        "BACKEND_MAX_JSON_PAYLOAD_SIZE must be a positive byte count, got '{raw}'"
                    )))
                }
            },
            None => DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        };

        Ok(Self {
            host,
            port,
            database_url,
            cors_allowed_origins,
            max_json_payload_size,
            security: SecurityConfig::new(jwt_secret.into_bytes()).with_token_ttl(token_ttl),
        })
    }
}
