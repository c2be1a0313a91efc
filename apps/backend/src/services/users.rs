use std::time::SystemTime;

use actix_web::http::StatusCode;
use sea_orm::ConnectionTrait;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::repos::users::{self, User};
use crate::state::security_config::SecurityConfig;

/// Successful login: the matched user and a freshly minted token.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
}

/// Store a registration document as-is.
pub async fn register(
    document: Map<String, Value>,
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<User, AppError> {
    let user = users::register_user(conn, document).await.map_err(|e| {
        error!(error = %e, "user registration failed");
        AppError::store(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user", e)
    })?;

    info!(user_id = %user.id, "user registered");
    Ok(user)
}

/// Look up a user by exact username and password and issue a token over
/// `{id, username}`. No match is `AppError::InvalidCredentials`.
pub async fn login(
    username: &str,
    password: &str,
    now: SystemTime,
    security: &SecurityConfig,
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<LoginOutcome, AppError> {
    let user = users::find_user_by_credentials(conn, username, password)
        .await
        .map_err(|e| {
            error!(error = %e, "login lookup failed");
            AppError::store(StatusCode::INTERNAL_SERVER_ERROR, "Failed to login", e)
        })?;

    let Some(user) = user else {
        warn!(username = %username, "login rejected: no matching user");
        return Err(AppError::invalid_credentials());
    };

    let token = mint_access_token(&user.identity(), now, security)?;

    info!(user_id = %user.id, "user logged in");
    Ok(LoginOutcome { user, token })
}
