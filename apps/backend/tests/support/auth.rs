//! Token helpers for tests

use std::time::{Duration, SystemTime};

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use quotes_backend::auth::jwt::{mint_access_token, Identity};
use quotes_backend::state::security_config::SecurityConfig;
use serde_json::json;

pub fn identity(id: &str, username: &str) -> Identity {
    Identity {
        id: id.to_string(),
        username: username.to_string(),
    }
}

/// Token string (without "Bearer " prefix)
pub fn mint_test_token(identity: &Identity, sec: &SecurityConfig) -> String {
    mint_access_token(identity, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Full Authorization header value including "Bearer " prefix
pub fn bearer_header(identity: &Identity, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(identity, sec))
}

/// A correctly signed token that expired a day ago.
pub fn mint_expired_token(identity: &Identity, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now() - sec.token_ttl - Duration::from_secs(24 * 60 * 60);
    mint_access_token(identity, issued, sec).expect("should mint expired token successfully")
}

/// Register a user through the API and log in, returning the token.
pub async fn register_and_login<S>(app: &S, username: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({"username": username, "password": password}))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "registration should succeed");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": username, "password": password}))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200, "login should succeed");

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["token"]
        .as_str()
        .expect("login response should carry a token")
        .to_string()
}
