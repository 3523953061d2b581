//! Route tests for /api/continents

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::features::shared::test_helpers::{app, send, send_raw};

#[tokio::test]
async fn test_post_returns_200_and_echoes_keywords() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/continents",
        Some(json!({"name": "Antarctica", "keywords": ["snow", "ice"]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!(["snow", "ice"]));
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_post_without_name_returns_400() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/continents",
        Some(json!({"keywords": ["snow"]})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_post_duplicate_name_returns_409() {
    let app = app();
    let payload = json!({"name": "Antarctica", "keywords": []});
    let (first, _) = send(&app, Method::POST, "/api/continents", Some(payload.clone())).await;
    let (second, _) = send(&app, Method::POST, "/api/continents", Some(payload)).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_returns_created_continent() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/continents",
        Some(json!({"name": "Antarctica", "keywords": ["snow", "ice"]})),
    )
    .await;

    let uri = format!("/api/continents/{}", created["id"].as_str().unwrap());
    let (status, body) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Antarctica");
    assert_eq!(body["keywords"], created["keywords"]);
}

#[tokio::test]
async fn test_get_with_malformed_id_returns_404() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/continents/mooshy", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_updates_name_and_preserves_keywords() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/continents",
        Some(json!({"name": "Antarctica", "keywords": ["snow", "ice"]})),
    )
    .await;

    let uri = format!("/api/continents/{}", created["id"].as_str().unwrap());
    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"name": "South Pole"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "South Pole");
    assert_eq!(body["keywords"], json!(["snow", "ice"]));
}

#[tokio::test]
async fn test_put_empty_body_returns_400() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/continents",
        Some(json!({"name": "Antarctica"})),
    )
    .await;

    let uri = format!("/api/continents/{}", created["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_duplicate_name_returns_409() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/continents",
        Some(json!({"name": "Antarctica"})),
    )
    .await;
    let (_, second) = send(
        &app,
        Method::POST,
        "/api/continents",
        Some(json!({"name": "Australia"})),
    )
    .await;

    let uri = format!("/api/continents/{}", second["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"name": "Antarctica"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_put_unknown_id_returns_404() {
    let app = app();
    let uri = format!("/api/continents/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"name": "Atlantis"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_204_then_404() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/continents",
        Some(json!({"name": "Antarctica"})),
    )
    .await;

    let uri = format!("/api/continents/{}", created["id"].as_str().unwrap());
    let (status, bytes) = send_raw(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (second, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(second, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_collection_root_returns_400() {
    let app = app();
    let (status, _) = send(&app, Method::DELETE, "/api/continents", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
