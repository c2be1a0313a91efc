use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::error::AppError;

/// In-memory SQLite lives and dies with its single connection.
fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

fn connect_options(url: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(url.to_owned());
    options.sqlx_logging(false);

    if is_sqlite_memory(url) {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(24 * 60 * 60));
    }

    options
}

/// Open a connection pool. This function does NOT run any migrations.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    Database::connect(connect_options(url))
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to connect: {e}")))
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(url).await?;

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::internal(format!("migration failed: {e}")))?;

    info!(backend = ?conn.get_database_backend(), "database ready");
    Ok(conn)
}
