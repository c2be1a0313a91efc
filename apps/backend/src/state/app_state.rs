use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::config::app::RuntimeEnv;
use crate::error::AppError;

/// Application state shared read-only by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Runtime environment, reported by the health probe
    pub env: RuntimeEnv,
}

impl AppState {
    /// Create a new AppState with the given database connection and security config
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
            env: RuntimeEnv::Development,
        }
    }

    /// Create a new AppState without a database connection.
    ///
    /// Gate-only tests use this: protected routes must reject before they
    /// ever ask for the store.
    pub fn new_without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            security,
            env: RuntimeEnv::Development,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    /// Borrow the database connection, if one was configured.
    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}

/// Borrow the database connection or fail with a 500.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable("Database connection not available"))
}
