//! Handler tests for the examples domain
//!
//! These tests drive the domain router over the in-memory stack and verify
//! the HTTP contract:
//! - status codes follow the outcome protocol (200 / 400 / 500)
//! - the response envelope carries the right fields per outcome
//! - boundary checks reject requests before the service is involved

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

use domain_examples::ExampleService;
use domain_examples::handlers;
use domain_examples::memory::InMemoryUnitOfWorkFactory;
use domain_examples::values::UniqueId;

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app_and_factory() -> (Router, InMemoryUnitOfWorkFactory) {
    let factory = InMemoryUnitOfWorkFactory::new();
    let service = ExampleService::new(factory.clone());
    (handlers::router(service), factory)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_returns_success_envelope() {
    let (app, _factory) = app_and_factory();

    let response = app
        .oneshot(post_json("/", json!({ "name": "Soup" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["example"]["name"], "Soup");
    assert!(
        body["data"]["example"]["id"].is_string(),
        "the envelope carries the generated id"
    );
    assert!(body.get("message").is_none(), "success has no message");
    assert!(body.get("code").is_none(), "success has no code");
}

#[tokio::test]
async fn test_create_invalid_name_returns_fail_envelope() {
    let (app, _factory) = app_and_factory();

    let response = app
        .oneshot(post_json("/", json!({ "name": "So up" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["code"], "NAME_INVALID");
    let message = body["message"].as_str().unwrap();
    assert!(
        message.starts_with("The example couldn't be created."),
        "fail messages name the use case: {message}"
    );
    assert!(body.get("data").is_none(), "fail carries no data");
}

#[tokio::test]
async fn test_create_without_name_returns_generic_error_envelope() {
    let (app, _factory) = app_and_factory();

    let response = app.oneshot(post_json("/", json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Something went wrong.");
    assert!(body.get("code").is_none(), "internal detail never leaves");
    assert!(
        !body.to_string().contains("DOMAIN_OBJECT"),
        "internal codes never leave"
    );
}

#[tokio::test]
async fn test_read_rejects_malformed_uuid_at_the_boundary() {
    let (app, factory) = app_and_factory();

    let response = app.oneshot(get("/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["code"], "UID_INVALID");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("The example couldn't be found."),
        "read failures carry the read context"
    );

    // The request never made it past the boundary
    assert_eq!(factory.store().commit_count(), 0);
    assert_eq!(factory.store().rollback_count(), 0);
}

#[tokio::test]
async fn test_read_unknown_id_returns_fail() {
    let (app, _factory) = app_and_factory();

    let response = app
        .oneshot(get(&format!("/{}", UniqueId::generate())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["code"], "EXAMPLE_READ");
}

#[tokio::test]
async fn test_update_id_mismatch_rejected_before_the_service() {
    let (app, factory) = app_and_factory();

    let path_id = UniqueId::generate();
    let body_id = UniqueId::generate();

    let response = app
        .oneshot(put_json(
            &format!("/{path_id}"),
            json!({ "id": body_id.to_string(), "name": "Soup" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["code"], "ID_MISMATCH");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("The example couldn't be updated."),
        "mismatch reports under the update context"
    );

    // No unit of work was ever taken
    assert_eq!(factory.store().commit_count(), 0);
    assert_eq!(factory.store().rollback_count(), 0);
}

#[tokio::test]
async fn test_update_body_without_id_counts_as_mismatch() {
    let (app, _factory) = app_and_factory();

    let response = app
        .oneshot(put_json(
            &format!("/{}", UniqueId::generate()),
            json!({ "name": "Soup" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["code"], "ID_MISMATCH");
}

#[tokio::test]
async fn test_delete_rejects_malformed_uuid_with_delete_context() {
    let (app, _factory) = app_and_factory();

    let response = app.oneshot(delete("/1234")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["code"], "UID_INVALID");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("The example couldn't be deleted."),
    );
}

#[tokio::test]
async fn test_crud_round_trip_through_http() {
    let (app, _factory) = app_and_factory();

    // Create
    let response = app
        .clone()
        .oneshot(post_json("/", json!({ "name": "Soup" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response.into_body()).await;
    let id = created["data"]["example"]["id"].as_str().unwrap().to_string();

    // Read
    let response = app.clone().oneshot(get(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let read = json_body(response.into_body()).await;
    assert_eq!(read["data"]["example"]["name"], "Soup");

    // Update
    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/{id}"),
            json!({ "id": id, "name": "Stew" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response.into_body()).await;
    assert_eq!(updated["data"]["example"]["name"], "Stew");

    // Delete
    let response = app
        .clone()
        .oneshot(delete(&format!("/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = json_body(response.into_body()).await;
    assert!(
        deleted["data"]["example"]["date_deleted"].is_string(),
        "delete reports the marker"
    );

    // Still readable after soft delete
    let response = app.oneshot(get(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let after = json_body(response.into_body()).await;
    assert!(after["data"]["example"]["date_deleted"].is_string());
}

#[tokio::test]
async fn test_duplicate_name_maps_to_400_conflict_code() {
    let (app, _factory) = app_and_factory();

    let first = app
        .clone()
        .oneshot(post_json("/", json!({ "name": "Soup" })))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(post_json("/", json!({ "name": "Soup" })))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body = json_body(second.into_body()).await;
    assert_eq!(body["code"], "NAME_USED");
}
