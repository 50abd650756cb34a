//! Database URL classification and pool settings.

use std::time::Duration;

use sea_orm::ConnectOptions;

use crate::error::AppError;

/// Lifetime for the single in-memory SQLite connection. Recycling it would
/// drop the database; sqlx adds this to `Instant::now()`, so it stays finite.
pub const SQLITE_MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Private per connection, so the pool is pinned to one connection
    SqliteMemory,
}

impl DbKind {
    pub fn from_url(url: &str) -> Result<Self, AppError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(DbKind::Postgres)
        } else if url.starts_with("sqlite:") && url.contains(":memory:") {
            Ok(DbKind::SqliteMemory)
        } else if url.starts_with("sqlite:") {
            Ok(DbKind::SqliteFile)
        } else {
            Err(AppError::config(format!(
                "Unsupported DATABASE_URL scheme: {}",
                sanitize_db_url(url)
            )))
        }
    }

    pub fn engine(self) -> &'static str {
        match self {
            DbKind::Postgres => "postgresql",
            DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
        }
    }
}

pub fn connect_options(url: &str, kind: DbKind) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    match kind {
        DbKind::SqliteMemory => {
            opts.max_connections(1)
                .min_connections(1)
                .max_lifetime(SQLITE_MEMORY_CONN_LIFETIME)
                .idle_timeout(SQLITE_MEMORY_CONN_LIFETIME);
        }
        DbKind::SqliteFile => {
            opts.max_connections(4).min_connections(1);
        }
        DbKind::Postgres => {
            opts.max_connections(10).min_connections(1);
        }
    }
    opts
}

/// Strip credentials from a database URL before logging it.
pub fn sanitize_db_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
