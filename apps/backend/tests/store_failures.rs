//! Failed store calls surface as envelopes carrying the raw store error.

mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use common::send;
use quotes_backend::state::app_state::AppState;
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};
use support::auth::{identity, mint_test_token};
use support::{build_test_state, create_test_app, test_security};

async fn state_without_table(table: &str) -> Result<AppState, Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    state
        .db()
        .expect("test state has a store")
        .execute_unprepared(&format!("DROP TABLE {table}"))
        .await?;
    Ok(state)
}

fn assert_store_failure(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "body: {body}");
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], message);
    assert!(body["error"].is_string(), "raw store error expected: {body}");
    assert!(body.get("data").is_none());
}

fn token() -> String {
    mint_test_token(&identity("u-1", "luke"), &test_security())
}

#[actix_web::test]
async fn test_list_failure_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(state_without_table("quotes").await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("x-access-token", token()))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_store_failure(
        status,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to fetch quotes",
    );
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.contains("no such table")));

    Ok(())
}

#[actix_web::test]
async fn test_add_failure_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(state_without_table("quotes").await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/quotes")
        .insert_header(("x-access-token", token()))
        .set_json(json!({"name": "yoda", "quote": "Do or do not."}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_store_failure(status, &body, StatusCode::BAD_REQUEST, "Failed to add quote");

    Ok(())
}

#[actix_web::test]
async fn test_update_failure_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(state_without_table("quotes").await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::put()
        .uri("/quotes/yoda")
        .insert_header(("x-access-token", token()))
        .set_json(json!({"quote": "There is no try."}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_store_failure(
        status,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to update quote information",
    );

    Ok(())
}

#[actix_web::test]
async fn test_delete_failure_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(state_without_table("quotes").await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::delete()
        .uri("/quotes")
        .insert_header(("x-access-token", token()))
        .set_json(json!({"name": "yoda"}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_store_failure(
        status,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to delete quote",
    );

    Ok(())
}

#[actix_web::test]
async fn test_register_failure_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(state_without_table("users").await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({"username": "luke", "password": "force123"}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_store_failure(
        status,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to create user",
    );

    Ok(())
}

#[actix_web::test]
async fn test_login_failure_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(state_without_table("users").await?)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": "luke", "password": "force123"}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_store_failure(
        status,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to login",
    );
    assert!(body.get("token").is_none());

    Ok(())
}
