//! Integration tests for the wallet routes

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use budgetory_api::create_app;

use common::{bearer, context};

#[actix_web::test]
async fn test_wallets_require_authentication() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/wallets/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Authentication credentials were not provided.");

    let req = test::TestRequest::get()
        .uri("/api/wallets/")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key("www-authenticate"));
}

#[actix_web::test]
async fn test_create_and_list_wallets() {
    let ctx = context();
    let (_, token) = ctx.signed_in("owner@example.com").await;
    let (_, other) = ctx.signed_in("other@example.com").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/wallets/")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Household", "currency": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let wallet: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(wallet["name"], "Household");
    assert_eq!(wallet["currency"], 3);
    assert!(wallet["description"].is_null());

    let req = test::TestRequest::get()
        .uri("/api/wallets/")
        .insert_header(bearer(&token))
        .to_request();
    let mine: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(mine.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/wallets/")
        .insert_header(bearer(&other))
        .to_request();
    let theirs: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(theirs.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_create_wallet_with_unknown_currency() {
    let ctx = context();
    let (_, token) = ctx.signed_in("owner@example.com").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/wallets/")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Household", "currency": 99}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"]["currency"][0], "Invalid pk \"99\" - object does not exist.");
}

#[actix_web::test]
async fn test_update_and_delete_wallet() {
    let ctx = context();
    let (_, token) = ctx.signed_in("owner@example.com").await;
    let (_, other) = ctx.signed_in("other@example.com").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/wallets/")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Household", "currency": 1}))
        .to_request();
    let wallet: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let url = format!("/api/wallets/{}/", wallet["id"]);

    let req = test::TestRequest::patch()
        .uri(&url)
        .insert_header(bearer(&token))
        .set_json(json!({"description": "Shared costs"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(patched["name"], "Household");
    assert_eq!(patched["description"], "Shared costs");

    let req = test::TestRequest::put()
        .uri(&url)
        .insert_header(bearer(&token))
        .set_json(json!({"description": "No name"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&url)
        .insert_header(bearer(&other))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&url)
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&url)
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
