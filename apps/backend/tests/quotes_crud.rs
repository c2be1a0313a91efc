mod common;
mod support;

use actix_http::Request;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::unique_name;
use common::send;
use serde_json::{json, Value};
use support::auth::register_and_login;
use support::{build_test_state, create_test_app};

fn authed(req: test::TestRequest, token: &str) -> Request {
    req.insert_header(("x-access-token", token.to_string()))
        .to_request()
}

#[actix_web::test]
async fn test_add_then_list_quotes() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let token = register_and_login(&app, &unique_name("user"), "pw").await;

    for (name, quote) in [("yoda", "Do or do not."), ("obi-wan", "Hello there.")] {
        let req = authed(
            test::TestRequest::post()
                .uri("/quotes")
                .set_json(json!({"name": name, "quote": quote})),
            &token,
        );
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["ok"], true);
        assert_eq!(body["message"], "Successfully Added quote");
    }

    let (status, body) = send(&app, authed(test::TestRequest::get().uri("/"), &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully fetched quotes");

    let data = body["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "yoda");
    assert_eq!(data[0]["quote"], "Do or do not.");
    assert_eq!(data[1]["name"], "obi-wan");
    assert!(data.iter().all(|q| q["_id"].is_string()));

    Ok(())
}

#[actix_web::test]
async fn test_add_quote_keeps_extra_fields() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let token = register_and_login(&app, &unique_name("user"), "pw").await;

    let req = authed(
        test::TestRequest::post()
            .uri("/quotes")
            .set_json(json!({"name": "vader", "quote": "I am your father.", "episode": 5})),
        &token,
    );
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, authed(test::TestRequest::get().uri("/"), &token)).await;
    assert_eq!(body["data"][0]["episode"], 5);

    Ok(())
}

#[actix_web::test]
async fn test_add_quote_rejects_array_body() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let token = register_and_login(&app, &unique_name("user"), "pw").await;

    let req = authed(
        test::TestRequest::post()
            .uri("/quotes")
            .set_json(json!(["not", "an", "object"])),
        &token,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");

    Ok(())
}

#[actix_web::test]
async fn test_update_existing_quote() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let token = register_and_login(&app, &unique_name("user"), "pw").await;

    let req = authed(
        test::TestRequest::post()
            .uri("/quotes")
            .set_json(json!({"name": "yoda", "quote": "Do or do not.", "episode": 5})),
        &token,
    );
    send(&app, req).await;

    let req = authed(
        test::TestRequest::put()
            .uri("/quotes/yoda")
            .set_json(json!({"quote": "There is no try."})),
        &token,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Successfully Updated quote information");
    assert_eq!(body["data"]["name"], "yoda");
    assert_eq!(body["data"]["quote"], "There is no try.");
    assert_eq!(body["data"]["episode"], 5);

    let (_, body) = send(&app, authed(test::TestRequest::get().uri("/"), &token)).await;
    let data = body["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 1, "update must not insert a second quote");
    assert_eq!(data[0]["quote"], "There is no try.");

    Ok(())
}

#[actix_web::test]
async fn test_update_can_rename_quote() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let token = register_and_login(&app, &unique_name("user"), "pw").await;

    let req = authed(
        test::TestRequest::post()
            .uri("/quotes")
            .set_json(json!({"name": "ben", "quote": "Use the Force."})),
        &token,
    );
    send(&app, req).await;

    let req = authed(
        test::TestRequest::put()
            .uri("/quotes/ben")
            .set_json(json!({"name": "obi-wan"})),
        &token,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "obi-wan");
    assert_eq!(body["data"]["quote"], "Use the Force.");

    let req = authed(
        test::TestRequest::delete()
            .uri("/quotes")
            .set_json(json!({"name": "ben"})),
        &token,
    );
    let (_, body) = send(&app, req).await;
    assert_eq!(body["message"], "No quote to delete");

    Ok(())
}

#[actix_web::test]
async fn test_update_missing_quote_inserts_it() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let token = register_and_login(&app, &unique_name("user"), "pw").await;

    let req = authed(
        test::TestRequest::put()
            .uri("/quotes/leia")
            .set_json(json!({"quote": "Help me, Obi-Wan Kenobi."})),
        &token,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "leia");
    assert_eq!(body["data"]["quote"], "Help me, Obi-Wan Kenobi.");
    assert!(body["data"]["_id"].is_string());

    let (_, body) = send(&app, authed(test::TestRequest::get().uri("/"), &token)).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    Ok(())
}

#[actix_web::test]
async fn test_delete_without_name_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let token = register_and_login(&app, &unique_name("user"), "pw").await;

    for payload in [
        json!({}),
        json!({"name": ""}),
        json!({"name": "   "}),
        json!({"name": null}),
        json!({"name": 5}),
        json!({"name": ["yoda"]}),
    ] {
        let req = authed(
            test::TestRequest::delete().uri("/quotes").set_json(payload),
            &token,
        );
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
        assert_eq!(body["message"], "Please add name in body");
    }

    Ok(())
}

#[actix_web::test]
async fn test_delete_with_no_match() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let token = register_and_login(&app, &unique_name("user"), "pw").await;

    let req = authed(
        test::TestRequest::delete()
            .uri("/quotes")
            .set_json(json!({"name": "yoda"})),
        &token,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "No quote to delete");

    Ok(())
}

#[actix_web::test]
async fn test_delete_removes_one_quote() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let token = register_and_login(&app, &unique_name("user"), "pw").await;

    for quote in ["Do or do not.", "Judge me by my size, do you?"] {
        let req = authed(
            test::TestRequest::post()
                .uri("/quotes")
                .set_json(json!({"name": "yoda", "quote": quote})),
            &token,
        );
        send(&app, req).await;
    }

    let req = authed(
        test::TestRequest::delete()
            .uri("/quotes")
            .set_json(json!({"name": "yoda"})),
        &token,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully deleted quote of yoda");

    let (_, body) = send(&app, authed(test::TestRequest::get().uri("/"), &token)).await;
    let remaining: Vec<Value> = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(remaining.len(), 1, "only one matching quote is deleted");

    Ok(())
}
