mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{TestApp, EDITOR_TOKEN};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// Without a content namespace every read answers its default rather than an
// error.
#[tokio::test]
async fn test_reads_short_circuit_to_defaults_without_namespace() {
    let app = TestApp::unconfigured().await;

    for uri in ["/api/v1/events/upcoming", "/api/v1/events/past", "/api/v1/team"] {
        let res = app.router.clone().oneshot(
            Request::builder().method("GET").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(parse_body(res).await.as_array().unwrap().is_empty(), "expected empty list for {}", uri);
    }

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/site-settings")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let settings = parse_body(res).await;
    assert_eq!(settings["groupme_link"], Value::Null);
    assert_eq!(settings["email"], Value::Null);
}

#[tokio::test]
async fn test_editor_writes_rejected_without_namespace() {
    let app = TestApp::unconfigured().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/events")
            .header(header::AUTHORIZATION, format!("Bearer {}", EDITOR_TOKEN))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"title": "Nowhere To Go"}).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}
