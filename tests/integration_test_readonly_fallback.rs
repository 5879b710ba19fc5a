mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::TestApp;
use org_site_backend::domain::models::upcoming_event::UpcomingEvent;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_readonly_app_serves_transient_past_view_without_writing() {
    let app = TestApp::read_only().await;

    // Editors populated the store out-of-band.
    let mut event = UpcomingEvent::new(
        app.dataset(),
        "Autumn Picnic".to_string(),
        Some((Utc::now() - Duration::days(2)).format("%Y-%m-%d").to_string()),
    );
    event.description = Some("Food and games".to_string());
    let event = app.state.upcoming_repo.create(&event).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/events/past")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let past = parse_body(res).await;
    let past = past.as_array().unwrap().clone();

    assert_eq!(past.len(), 1);
    assert_eq!(past[0]["id"], format!("auto-{}", event.id));
    assert_eq!(past[0]["title"], "Autumn Picnic");
    assert_eq!(past[0]["description"], "Food and games");
    assert_eq!(past[0]["image_urls"].as_array().unwrap().len(), 0);

    // Display-only: the store was not mutated.
    let upcoming = app.state.upcoming_repo.list(&app.dataset()).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    let persisted_past = app.state.past_repo.list(&app.dataset()).await.unwrap();
    assert!(persisted_past.is_empty());
}

#[tokio::test]
async fn test_readonly_app_prefers_persisted_past_events() {
    let app = TestApp::read_only().await;

    let event = UpcomingEvent::new(
        app.dataset(),
        "Lost To Time".to_string(),
        Some((Utc::now() - Duration::days(2)).format("%Y-%m-%d").to_string()),
    );
    app.state.upcoming_repo.create(&event).await.unwrap();

    let mut archived = org_site_backend::domain::models::past_event::PastEvent::new(
        app.dataset(),
        "Archived Gala".to_string(),
        Some("2023-11-01".to_string()),
    );
    archived.image_urls = vec!["https://cdn.example.com/gala.jpg".to_string()];
    app.state.past_repo.create(&archived).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/events/past")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let past = parse_body(res).await;
    let past = past.as_array().unwrap().clone();

    // Persisted records win over the transient projection.
    assert_eq!(past.len(), 1);
    assert_eq!(past[0]["title"], "Archived Gala");
}

#[tokio::test]
async fn test_editor_api_unavailable_without_write_token() {
    let app = TestApp::read_only().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/events")
            .header(header::AUTHORIZATION, "Bearer anything")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"title": "Nope"}).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}
