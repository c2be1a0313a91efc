use std::time::SystemTime;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::http::envelope::ApiResponse;
use crate::services::users;
use crate::state::app_state::{require_db, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

impl LoginRequest {
    /// Both credentials, if both are strings. Anything else cannot match a
    /// stored user.
    fn credentials(self) -> Option<(String, String)> {
        match (self.username, self.password) {
            (Some(Value::String(username)), Some(Value::String(password))) => {
                Some((username, password))
            }
            _ => None,
        }
    }
}

/// Store the request body as a new user document.
async fn register(
    body: ValidatedJson<Map<String, Value>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    users::register(body.into_inner(), db).await?;

    Ok(ApiResponse::success("Successfully created new user").respond(StatusCode::CREATED))
}

/// Exact username/password match; answers with the user document and a
/// seven-day token.
async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let Some((username, password)) = body.into_inner().credentials() else {
        return Err(AppError::invalid_credentials());
    };

    let db = require_db(&app_state)?;

    let outcome = users::login(
        &username,
        &password,
        SystemTime::now(),
        &app_state.security,
        db,
    )
    .await?;

    Ok(ApiResponse::success("Successfully login")
        .with_data(outcome.user.rendered())
        .with_token(outcome.token)
        .respond(StatusCode::OK))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/login").route(web::post().to(login)));
}
