//! Test fixtures shared by the route test suites
//!
//! Builds the full `/api` router on top of the in-memory backend and drives
//! it with `tower::ServiceExt::oneshot`, so route tests exercise the same
//! wiring as a running server without a database.

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::features::AppState;
use crate::store::memory::MemoryCatalog;

/// Fresh application router backed by an empty in-memory catalog
pub fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryCatalog::new()));
    Router::new().nest("/api", crate::features::router(state))
}

/// Send a request and return the status plus raw body bytes
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

/// Send a request and decode the body as JSON (`Null` when empty)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
