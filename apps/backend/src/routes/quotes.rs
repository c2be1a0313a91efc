use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::adapters::quotes_sea::QuoteUpdate;
use crate::error::AppError;
use crate::extractors::current_identity::CurrentIdentity;
use crate::extractors::validated_json::ValidatedJson;
use crate::http::envelope::ApiResponse;
use crate::middleware::auth_gate::AuthGate;
use crate::repos::quotes::{self, DeleteOutcome, Quote};
use crate::state::app_state::{require_db, AppState};

#[derive(Debug, Deserialize)]
pub struct UpdateQuoteRequest {
    pub name: Option<String>,
    pub quote: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuoteRequest {
    pub name: Option<Value>,
}

impl DeleteQuoteRequest {
    /// A blank or non-string name counts as missing.
    fn name(self) -> Option<String> {
        match self.name {
            Some(Value::String(name)) if !name.trim().is_empty() => Some(name),
            _ => None,
        }
    }
}

async fn list_quotes(
    _caller: CurrentIdentity,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let quotes = quotes::list_quotes(db).await.map_err(|e| {
        AppError::store(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch quotes", e)
    })?;

    let data = Value::Array(quotes.iter().map(Quote::rendered).collect());
    Ok(ApiResponse::success("Successfully fetched quotes")
        .with_data(data)
        .respond(StatusCode::OK))
}

async fn create_quote(
    CurrentIdentity(caller): CurrentIdentity,
    body: ValidatedJson<Map<String, Value>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let quote = quotes::create_quote(db, body.into_inner())
        .await
        .map_err(|e| AppError::store(StatusCode::BAD_REQUEST, "Failed to add quote", e))?;

    info!(user = %caller.username, quote_id = %quote.id, "quote added");
    Ok(ApiResponse::success("Successfully Added quote").respond(StatusCode::CREATED))
}

/// Upsert by the name in the path.
async fn update_quote(
    CurrentIdentity(caller): CurrentIdentity,
    path: web::Path<String>,
    body: ValidatedJson<UpdateQuoteRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let UpdateQuoteRequest {
        name: new_name,
        quote,
    } = body.into_inner();
    let db = require_db(&app_state)?;

    let updated = quotes::upsert_quote_by_name(
        db,
        &name,
        QuoteUpdate {
            name: new_name,
            quote,
        },
    )
    .await
    .map_err(|e| {
        AppError::store(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to update quote information",
            e,
        )
    })?;

    info!(user = %caller.username, quote_id = %updated.id, name = %name, "quote upserted");
    Ok(ApiResponse::success("Successfully Updated quote information")
        .with_data(updated.rendered())
        .respond(StatusCode::OK))
}

async fn delete_quote(
    CurrentIdentity(caller): CurrentIdentity,
    body: ValidatedJson<DeleteQuoteRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let Some(name) = body.into_inner().name() else {
        return Err(AppError::bad_request("Please add name in body"));
    };
    let db = require_db(&app_state)?;

    let outcome = quotes::delete_quote_by_name(db, &name).await.map_err(|e| {
        AppError::store(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete quote", e)
    })?;

    let message = match outcome {
        DeleteOutcome::NothingToDelete => "No quote to delete".to_string(),
        DeleteOutcome::Deleted => {
            info!(user = %caller.username, name = %name, "quote deleted");
            format!("Successfully deleted quote of {name}")
        }
    };

    Ok(ApiResponse::success(message).respond(StatusCode::OK))
}

/// Every route here sits behind [`AuthGate`].
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .wrap(AuthGate)
            .route(web::get().to(list_quotes)),
    )
    .service(
        web::resource("/quotes")
            .wrap(AuthGate)
            .route(web::post().to(create_quote))
            .route(web::delete().to(delete_quote)),
    )
    .service(
        web::resource("/quotes/{name}")
            .wrap(AuthGate)
            .route(web::put().to(update_quote)),
    );
}
