//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, TimeZone, Utc};
use directory_core::clock::Clock;
use directory_suppliers::memory::InMemorySupplierRepository;
use directory_suppliers::repository::SupplierRepository;
use directory_test_support::SteppingClock;
use http_body_util::BodyExt;
use tower::ServiceExt;

use directory_api::routes;
use directory_api::state::AppState;

/// Deterministic clock used across all integration tests: starts at a fixed
/// instant and advances one second per reading, so successive mutations get
/// strictly increasing timestamps.
fn stepping_clock() -> Arc<dyn Clock> {
    Arc::new(SteppingClock::new(
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        Duration::seconds(1),
    ))
}

/// Build the full app router over a demo-seeded in-memory store. Uses the
/// same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_app_with(Arc::new(InMemorySupplierRepository::with_demo_data(
        stepping_clock(),
    )))
}

/// Build the full app router over an empty in-memory store.
pub fn build_empty_test_app() -> Router {
    build_app_with(Arc::new(InMemorySupplierRepository::new(stepping_clock())))
}

fn build_app_with(suppliers: Arc<dyn SupplierRepository>) -> Router {
    let app_state = AppState::new(suppliers);

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/suppliers", routes::suppliers::router())
        .with_state(app_state)
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, json_request("POST", uri, body)).await
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, json_request("PUT", uri, body)).await
}

/// Send a DELETE request and return the response.
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}
