use migration::{migrate, MigrationCommand};
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{connect_options, sanitize_db_url, DbKind};
use crate::error::AppError;

/// Open a pool for `url`. Does not migrate.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let kind = DbKind::from_url(url)?;
    let conn = Database::connect(connect_options(url, kind))
        .await
        .map_err(|e| AppError::db_unavailable(format!("Failed to connect to database: {e}")))?;

    info!(
        engine = kind.engine(),
        url = %sanitize_db_url(url),
        "Database connected"
    );
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(url).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("Migration failed: {e}")))?;
    Ok(conn)
}
