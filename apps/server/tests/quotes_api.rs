use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use quotable_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

// Each test gets its own database file; Config is built directly instead of
// through the environment so parallel tests cannot step on each other.
async fn test_app(tmp: &TempDir) -> Router {
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
    };
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn send(app: &Router, method: &str, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn read_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp).await;

    let response = send_json(
        &app,
        "POST",
        "/api/quotes",
        json!({"author": "  Ada ", "content": "Hello"}),
    )
    .await;
    assert_eq!(response.status(), 201);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Success! A new quote was added");
    // Stored values are trimmed, on create as well as update.
    assert_eq!(body["data"][0]["author"], "Ada");
    assert_eq!(body["data"][0]["content"], "Hello");

    let id = body["data"][0]["id"].as_str().unwrap().to_string();
    let response = send(&app, "GET", &format!("/api/quotes/{id}")).await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    assert_eq!(body["quote"][0]["id"], id.as_str());
    assert_eq!(body["quote"][0]["author"], "Ada");
    assert_eq!(body["quote"][0]["content"], "Hello");
}

#[tokio::test]
async fn create_requires_author_and_content() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp).await;

    let response = send_json(&app, "POST", "/api/quotes", json!({"content": "Hello"})).await;
    assert_eq!(response.status(), 400);
    let body = read_json(response).await;
    assert_eq!(body["error"]["status"], 400);
    assert_eq!(body["error"]["message"], "Author is required");

    let response = send_json(
        &app,
        "POST",
        "/api/quotes",
        json!({"author": "Ada", "content": "   "}),
    )
    .await;
    assert_eq!(response.status(), 400);
    let body = read_json(response).await;
    assert_eq!(body["error"]["message"], "Content is required");
}

#[tokio::test]
async fn get_unknown_id_returns_404_with_id() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp).await;

    let response = send(&app, "GET", "/api/quotes/no-such-id").await;
    assert_eq!(response.status(), 404);
    let body = read_json(response).await;
    assert_eq!(body["error"]["status"], 404);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("no-such-id"));
}

#[tokio::test]
async fn list_returns_most_recent_first() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp).await;

    send_json(
        &app,
        "POST",
        "/api/quotes",
        json!({"author": "Ada", "content": "First"}),
    )
    .await;
    // created_at has millisecond resolution; space the inserts out so the
    // ordering assertion cannot tie.
    tokio::time::sleep(Duration::from_millis(20)).await;
    let response = send_json(
        &app,
        "POST",
        "/api/quotes",
        json!({"author": "Grace", "content": "Second"}),
    )
    .await;
    let newest_id = read_json(response).await["data"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(&app, "GET", "/api/quotes").await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    let quotes = body["quotes"].as_array().unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0]["id"], newest_id.as_str());
    assert_eq!(quotes[1]["content"], "First");
}

#[tokio::test]
async fn patch_updates_only_supplied_fields() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp).await;

    let response = send_json(
        &app,
        "POST",
        "/api/quotes",
        json!({"author": "Ada", "content": "Hello"}),
    )
    .await;
    let id = read_json(response).await["data"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send_json(
        &app,
        "PATCH",
        &format!("/api/quotes/{id}"),
        json!({"content": " World "}),
    )
    .await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Success! Quote was updated");
    assert_eq!(body["data"][0]["content"], "World");
    assert_eq!(body["data"][0]["author"], "Ada");
}

#[tokio::test]
async fn patch_rejects_blank_payload() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp).await;

    let response = send_json(
        &app,
        "POST",
        "/api/quotes",
        json!({"author": "Ada", "content": "Hello"}),
    )
    .await;
    let id = read_json(response).await["data"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send_json(&app, "PATCH", &format!("/api/quotes/{id}"), json!({})).await;
    assert_eq!(response.status(), 400);
    let body = read_json(response).await;
    assert_eq!(body["error"]["message"], "Must contain author or content");

    let response = send_json(
        &app,
        "PATCH",
        &format!("/api/quotes/{id}"),
        json!({"author": "  ", "content": ""}),
    )
    .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn patch_unknown_id_returns_404() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp).await;

    let response = send_json(
        &app,
        "PATCH",
        "/api/quotes/missing",
        json!({"author": "Ada"}),
    )
    .await;
    assert_eq!(response.status(), 404);
    let body = read_json(response).await;
    assert!(body["error"]["message"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let tmp = TempDir::new().unwrap();
    let app = test_app(&tmp).await;

    let response = send_json(
        &app,
        "POST",
        "/api/quotes",
        json!({"author": "Ada", "content": "Hello"}),
    )
    .await;
    let id = read_json(response).await["data"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(&app, "DELETE", &format!("/api/quotes/{id}")).await;
    assert_eq!(response.status(), 204);

    let response = send(&app, "GET", &format!("/api/quotes/{id}")).await;
    assert_eq!(response.status(), 404);

    let response = send(&app, "DELETE", &format!("/api/quotes/{id}")).await;
    assert_eq!(response.status(), 404);
}
