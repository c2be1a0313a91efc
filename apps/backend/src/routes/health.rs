//! `GET /health`: outside the gate, always 200. `ok` reflects whether the
//! store answered.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::adapters::{quotes_sea, users_sea};
use crate::config::app::RuntimeEnv;
use crate::http::envelope::ApiResponse;
use crate::state::app_state::AppState;

/// Document counts per collection, read in one pass.
async fn collection_counts(db: &DatabaseConnection) -> Result<(u64, u64), DbErr> {
    let users = users_sea::count_users(db).await?;
    let quotes = quotes_sea::count_quotes(db).await?;
    Ok((users, quotes))
}

async fn store_report(db: Option<&DatabaseConnection>) -> Result<Value, String> {
    let db = db.ok_or_else(|| "no store configured".to_string())?;
    let (users, quotes) = collection_counts(db).await.map_err(|e| e.to_string())?;
    let migration = get_latest_migration_version(db).await.ok().flatten();

    Ok(json!({
        "migration": migration,
        "collections": { "users": users, "quotes": quotes },
    }))
}

async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let checked_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    let runtime_env = match app_state.env {
        RuntimeEnv::Production => "production",
        RuntimeEnv::Development => "development",
    };
    let service = json!({
        "version": env!("CARGO_PKG_VERSION"),
        "env": runtime_env,
        "checked_at": checked_at,
    });

    let response = match store_report(app_state.db()).await {
        Ok(store) => ApiResponse::success("Service is healthy")
            .with_data(json!({ "service": service, "store": store })),
        Err(error) => {
            warn!(error = %error, "health probe: store unavailable");
            ApiResponse::failure("Store unavailable")
                .with_data(json!({ "service": service }))
                .with_error(Some(error))
        }
    };

    response.respond(StatusCode::OK)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
