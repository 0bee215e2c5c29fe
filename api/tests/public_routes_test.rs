//! Integration tests for health, currencies, API docs and fallback responses

mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use serde_json::json;

use budgetory_api::create_app;
use budgetory_api::routes::api_docs;

use common::context;

#[actix_web::test]
async fn test_health_check() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "budgetory-api");
}

#[actix_web::test]
async fn test_currencies_are_public_and_sorted() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/currencies/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "EUR"},
            {"id": 2, "name": "GBP"},
            {"id": 3, "name": "PLN"},
            {"id": 4, "name": "USD"},
        ])
    );
}

#[actix_web::test]
async fn test_openapi_document_tags_every_operation() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/docs/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/users/register/",
        "/api/users/register-superuser/",
        "/api/users/login/",
        "/api/users/demo-login/",
        "/api/users/token/refresh/",
        "/api/currencies/",
        "/api/wallets/",
        "/api/wallets/{pk}/",
        "/api/wallets/{wallet_pk}/entities/",
        "/api/wallets/{wallet_pk}/entities/{pk}/",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }

    for (path, operations) in paths {
        for (method, operation) in operations.as_object().unwrap() {
            let tags = operation["tags"].as_array().unwrap();
            assert_eq!(tags.len(), 1, "{} {}", method, path);
        }
    }

    assert_eq!(paths["/api/users/register-superuser/"]["post"]["tags"][0], "01. Register");
    assert_eq!(paths["/api/users/login/"]["post"]["tags"][0], "02. Login");
    assert_eq!(paths["/api/currencies/"]["get"]["tags"][0], "03. Wallets");
    assert_eq!(
        paths["/api/wallets/{wallet_pk}/entities/{pk}/"]["delete"]["tags"][0],
        "06. Entities"
    );
}

#[actix_web::test]
async fn test_served_document_matches_collected_views() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/docs/").to_request();
    let served: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let collected = serde_json::to_value(api_docs().to_openapi()).unwrap();
    assert_eq!(served["paths"], collected["paths"]);
}

#[actix_web::test]
async fn test_openapi_summaries_follow_views() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/docs/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let paths = &body["paths"];

    let login = &paths["/api/users/login/"]["post"];
    assert_eq!(login["summary"], "User login");
    assert_eq!(login["description"], "Authenticates User. Returns access and refresh tokens.");

    assert_eq!(paths["/api/users/token/refresh/"]["post"]["summary"], "Token refresh");
    assert_eq!(paths["/api/users/register-superuser/"]["post"]["summary"], "Register super user");
    assert_eq!(paths["/api/currencies/"]["get"]["description"], "List of all Currencies.");

    let entity = &paths["/api/wallets/{wallet_pk}/entities/{pk}/"];
    assert_eq!(entity["patch"]["summary"], "Entity update");
    assert!(entity["put"].get("summary").is_none());
}

#[actix_web::test]
async fn test_swagger_ui_is_served() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/docs/ui/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/docs/openapi.json").to_request();
    let document: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let collected = serde_json::to_value(api_docs().to_openapi()).unwrap();
    assert_eq!(document["paths"], collected["paths"]);
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for uri in ["/api/unknown/", "/nothing-here", "/api/users/logout/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"detail": "Not found."}));
    }
}

#[actix_web::test]
async fn test_malformed_json_is_a_parse_error() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/users/register/")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("JSON parse error - "), "{}", detail);
}

#[actix_web::test]
async fn test_non_json_body_is_unsupported() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/users/login/")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload("email=user@example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
