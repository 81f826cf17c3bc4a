#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use campsite::database::schema;
use campsite::web;

// =============================================================================
// Test Harness
// =============================================================================

/// Fresh router over a fresh in-memory database. The pool is capped at one
/// connection: every connection to `sqlite::memory:` gets its own database,
/// so a larger pool would scatter statements across separate stores.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    schema::ensure_schema(&pool).await.expect("schema");
    (web::app(pool.clone()), pool)
}

// =============================================================================
// Request Helpers
// =============================================================================

pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    parse(app.clone().oneshot(req).await.unwrap()).await
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    send_raw(app, method, uri, body.to_string()).await
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: impl Into<String>,
) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    parse(app.clone().oneshot(req).await.unwrap()).await
}

async fn parse(res: Response<Body>) -> (StatusCode, Value) {
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// =============================================================================
// Seeding
// =============================================================================

/// Activities have no create endpoint; tests seed them through the repo.
pub async fn seed_activity(pool: &SqlitePool, name: &str, difficulty: i64) -> i64 {
    campsite::database::activity_repo::insert_activity(pool, name, difficulty)
        .await
        .expect("seed activity")
}

pub async fn create_camper(app: &Router, name: &str, age: i64) -> i64 {
    let (status, body) = send_json(
        app,
        "POST",
        "/campers",
        serde_json::json!({ "name": name, "age": age }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("camper id")
}

pub async fn create_signup(app: &Router, camper_id: i64, activity_id: i64, time: i64) -> i64 {
    let (status, body) = send_json(
        app,
        "POST",
        "/signups",
        serde_json::json!({ "camper_id": camper_id, "activity_id": activity_id, "time": time }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("signup id")
}
