//! HTTP API Integration Tests
//!
//! Exercises the router end to end:
//! - `generate-design` messages over `/api/messages`
//! - Ignored message types
//! - Document snapshots, reset and panel config
//! - Health probes

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use forge_core::{Document, Viewport};
use forge_plugin::{DesignPlugin, PanelConfig};
use forge_server::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let plugin = DesignPlugin::new(
        Document::new(Viewport::new(0.0, 0.0, 1000.0, 1000.0)),
        PanelConfig::new("Forge Test", "http://localhost/panel.html"),
    );
    router(AppState::new(plugin))
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn test_generate_design_over_http() {
    let app = app();
    let message = json!({
        "type": "generate-design",
        "data": {
            "frame": { "name": "Signup", "width": 400, "height": 600 },
            "components": [
                { "type": "text", "text": "Create account", "fontSize": 24 },
                { "type": "input", "label": "Email", "y": 60 },
                { "type": "divider" },
                { "type": "button", "text": "Continue", "y": 120 }
            ]
        }
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/messages", &message))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "type": "generation-complete", "success": true, "count": 4 })
    );

    let response = app
        .oneshot(get("/api/document"))
        .await
        .expect("request should succeed");
    let document = json_body(response).await;

    let board = &document["boards"][0];
    assert_eq!(board["name"], "Signup");
    assert_eq!(board["geometry"]["x"], 300.0);
    assert_eq!(board["geometry"]["y"], 200.0);
    assert_eq!(board["children"].as_array().map(Vec::len), Some(5));
    assert_eq!(board["children"][0]["content"], "Create account");
    assert_eq!(board["children"][0]["fontSize"], 24.0);
    assert_eq!(document["shape_count"], 6);
}

#[tokio::test]
async fn test_host_failure_is_reported() {
    let message = json!({
        "type": "generate-design",
        "data": { "components": [ { "type": "rectangle", "width": -1 } ] }
    });

    let response = app()
        .oneshot(post_json("/api/messages", &message))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["type"], "generation-complete");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid geometry for width: -1");
    assert!(body.get("count").is_none());
}

#[tokio::test]
async fn test_unhandled_message_type() {
    let response = app()
        .oneshot(post_json("/api/messages", &json!({ "type": "close-panel" })))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_message_without_type_is_rejected() {
    let response = app()
        .oneshot(post_json("/api/messages", &json!({ "data": {} })))
        .await
        .expect("request should succeed");
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_panel_config() {
    let response = app()
        .oneshot(get("/api/panel"))
        .await
        .expect("request should succeed");
    assert_eq!(
        json_body(response).await,
        json!({
            "title": "Forge Test",
            "url": "http://localhost/panel.html",
            "width": 400,
            "height": 600
        })
    );
}

#[tokio::test]
async fn test_health_probes() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/health/live"))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/health"))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], forge_core::VERSION);
    assert_eq!(body["checks"]["document"], true);
    assert_eq!(body["checks"]["shape_count"], 0);
    assert_eq!(body["checks"]["generations"], 0);
}

#[tokio::test]
async fn test_reset_document() {
    let app = app();
    let message = json!({
        "type": "generate-design",
        "data": { "components": [ { "type": "button" } ] }
    });

    for _ in 0..2 {
        app.clone()
            .oneshot(post_json("/api/messages", &message))
            .await
            .expect("request should succeed");
    }
    let response = app
        .clone()
        .oneshot(get("/api/document"))
        .await
        .expect("request should succeed");
    assert_eq!(json_body(response).await["shape_count"], 6);

    let response = app
        .clone()
        .oneshot(delete("/api/document"))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get("/api/document"))
        .await
        .expect("request should succeed");
    let document = json_body(response).await;
    assert_eq!(document["shape_count"], 0);
    assert_eq!(document["boards"], json!([]));
    assert_eq!(document["viewport"]["width"], 1000.0);
}

#[tokio::test]
async fn test_outcomes_are_counted() {
    let app = app();
    let ok = json!({ "type": "generate-design", "data": {} });
    let failing = json!({
        "type": "generate-design",
        "data": { "components": [ { "type": "rectangle", "height": -1 } ] }
    });
    let ignored = json!({ "type": "close-panel" });

    for message in [&ok, &failing, &ignored] {
        app.clone()
            .oneshot(post_json("/api/messages", message))
            .await
            .expect("request should succeed");
    }

    let response = app
        .oneshot(get("/health/ready"))
        .await
        .expect("request should succeed");
    let body = json_body(response).await;
    assert_eq!(body["checks"]["generations"], 2);
}
