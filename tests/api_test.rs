//! End-to-end tests for the create/list endpoints: round trips, schema
//! rejection, and the diagnostics endpoint, all against the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use mongodb::bson::Document;
use serde_json::{json, Value};
use tower::ServiceExt;

use creatorhub::config::Config;
use creatorhub::routes;
use creatorhub::state::AppState;
use creatorhub::store::memory::MemoryStore;
use creatorhub::store::{DocumentStore, Filter, StoreError};

fn test_app() -> Router {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        config: Config::default(),
    };
    routes::router(state)
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, path, Some(body)).await
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, Method::GET, path, None).await
}

#[tokio::test]
async fn root_returns_liveness_banner() {
    let app = test_app();
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "creatorhub");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn created_user_appears_in_list() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/users",
        json!({ "username": "alice", "email": "alice@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = get_json(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["_id"], Value::String(id));
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[0]["is_creator"], true);
}

#[tokio::test]
async fn every_create_endpoint_returns_an_id() {
    let app = test_app();

    let cases = [
        (
            "/posts",
            json!({ "author_id": "u1", "content_type": "text", "text": "hi" }),
        ),
        (
            "/comments",
            json!({ "post_id": "p1", "author_id": "u1", "text": "nice" }),
        ),
        ("/likes", json!({ "post_id": "p1", "user_id": "u1" })),
        (
            "/messages",
            json!({ "sender_id": "u1", "recipient_id": "u2", "body": "hey" }),
        ),
        (
            "/plans",
            json!({ "creator_id": "c1", "title": "Gold", "price_cents": 999, "tier": "gold" }),
        ),
        (
            "/subscriptions",
            json!({ "creator_id": "c1", "subscriber_id": "u1", "plan_id": "pl1" }),
        ),
        (
            "/payments",
            json!({ "user_id": "u1", "amount_cents": 999, "purpose": "tip" }),
        ),
        (
            "/notifications",
            json!({ "user_id": "u1", "type": "system", "title": "Welcome" }),
        ),
        (
            "/streams",
            json!({ "creator_id": "c1", "title": "Launch", "access": "pay_per_view" }),
        ),
        (
            "/audio-rooms",
            json!({ "host_id": "u1", "topic": "AMA", "speakers": ["u1", "u2"] }),
        ),
        (
            "/analytics",
            json!({ "event_name": "page_view", "properties": { "path": "/" } }),
        ),
    ];

    for (path, payload) in cases {
        let (status, body) = post_json(&app, path, payload).await;
        assert_eq!(status, StatusCode::OK, "create failed for {path}: {body}");
        assert!(
            body["id"].as_str().is_some_and(|id| !id.is_empty()),
            "no id for {path}: {body}"
        );
    }
}

#[tokio::test]
async fn invalid_enum_value_is_rejected_before_any_write() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/posts",
        json!({ "author_id": "u1", "content_type": "bogus" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("content_type"));

    // Nothing was stored.
    let (status, body) = get_json(&app, "/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_required_field_is_rejected() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/comments",
        json!({ "post_id": "p1", "author_id": "u1" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("text"));
}

#[tokio::test]
async fn constraint_violations_name_the_field() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/users",
        json!({ "username": "bob", "email": "not-an-email" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));

    let (status, body) = post_json(
        &app,
        "/plans",
        json!({ "creator_id": "c1", "title": "Broken", "price_cents": -5 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("price_cents"));
}

#[tokio::test]
async fn notifications_list_is_scoped_to_the_user() {
    let app = test_app();

    for (user, title) in [("u1", "first"), ("u1", "second"), ("u2", "other")] {
        let (status, _) = post_json(
            &app,
            "/notifications",
            json!({ "user_id": user, "type": "system", "title": title }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get_json(&app, "/notifications?user_id=u1").await;
    assert_eq!(status, StatusCode::OK);
    let notifications = body.as_array().unwrap();
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|n| n["user_id"] == "u1"));
}

/// Store whose server is never reachable.
struct UnreachableStore;

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn insert_one(&self, _: &str, _: Document) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("no server selected".into()))
    }

    async fn find_many(&self, _: &str, _: Filter, _: i64) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Unavailable("no server selected".into()))
    }

    async fn collection_names(&self, _: usize) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable("no server selected".into()))
    }
}

#[tokio::test]
async fn store_failure_is_a_500_on_data_endpoints_but_not_on_diagnostics() {
    let state = AppState {
        store: Arc::new(UnreachableStore),
        config: Config::default(),
    };
    let app = routes::router(state);

    let (status, body) = post_json(
        &app,
        "/users",
        json!({ "username": "alice", "email": "alice@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // The driver's message stays in the log, not the response.
    assert_eq!(body["error"], "internal server error");

    let (status, body) = get_json(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["store"].as_str().unwrap().starts_with("unavailable"));
    assert_eq!(body["connection_status"], "not connected");
    assert!(body["collections"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn diagnostics_always_answers_200_with_a_report() {
    let app = test_app();

    let (status, body) = get_json(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "running");
    assert_eq!(body["connection_status"], "connected");
    assert!(body["collections"].as_array().unwrap().is_empty());

    // Collections show up once documents exist.
    post_json(
        &app,
        "/users",
        json!({ "username": "alice", "email": "alice@example.com" }),
    )
    .await;
    post_json(
        &app,
        "/posts",
        json!({ "author_id": "u1", "content_type": "text" }),
    )
    .await;

    let (status, body) = get_json(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    let collections = body["collections"].as_array().unwrap();
    assert!(collections.contains(&json!("user")));
    assert!(collections.contains(&json!("post")));
}
