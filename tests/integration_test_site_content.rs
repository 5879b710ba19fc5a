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

async fn get_json(app: &TestApp, uri: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(uri)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

async fn editor_request(app: &TestApp, method: &str, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method(method).uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", EDITOR_TOKEN))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_site_settings_default_when_absent() {
    let app = TestApp::new().await;

    let settings = get_json(&app, "/api/v1/site-settings").await;
    assert_eq!(settings["groupme_link"], Value::Null);
    assert_eq!(settings["email"], Value::Null);
}

#[tokio::test]
async fn test_site_settings_roundtrip() {
    let app = TestApp::new().await;

    let res = editor_request(&app, "PUT", "/api/v1/site-settings", json!({
        "groupme_link": "https://groupme.com/join/abc",
        "email": "board@example.edu"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let settings = get_json(&app, "/api/v1/site-settings").await;
    assert_eq!(settings["groupme_link"], "https://groupme.com/join/abc");
    assert_eq!(settings["email"], "board@example.edu");

    // Upsert replaces, not appends.
    let res = editor_request(&app, "PUT", "/api/v1/site-settings", json!({
        "email": "new-board@example.edu"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let settings = get_json(&app, "/api/v1/site-settings").await;
    assert_eq!(settings["groupme_link"], Value::Null);
    assert_eq!(settings["email"], "new-board@example.edu");
}

#[tokio::test]
async fn test_mission_page_roundtrip() {
    let app = TestApp::new().await;

    let page = get_json(&app, "/api/v1/mission").await;
    assert_eq!(page["headline"], Value::Null);
    assert!(page["core_goals"].as_array().unwrap().is_empty());

    let res = editor_request(&app, "PUT", "/api/v1/mission", json!({
        "headline": "Our Mission",
        "mission_paragraph_1": "We bring students together.",
        "mission_paragraph_2": "And we throw great events.",
        "core_goals": [
            {"title": "Community", "items": ["Weekly socials", "Mentorship"]},
            {"title": "Service", "items": ["Campus cleanups"]}
        ]
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let page = get_json(&app, "/api/v1/mission").await;
    assert_eq!(page["headline"], "Our Mission");
    let goals = page["core_goals"].as_array().unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0]["title"], "Community");
    assert_eq!(goals[0]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_team_members_listed_in_authoring_order() {
    let app = TestApp::new().await;

    for name in ["Ada President", "Grace Treasurer"] {
        let res = editor_request(&app, "POST", "/api/v1/team", json!({
            "name": name,
            "role": "Board"
        })).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let team = get_json(&app, "/api/v1/team").await;
    let team = team.as_array().unwrap();
    assert_eq!(team.len(), 2);
    assert_eq!(team[0]["name"], "Ada President");
    assert_eq!(team[1]["name"], "Grace Treasurer");
}

#[tokio::test]
async fn test_editor_writes_require_valid_token() {
    let app = TestApp::new().await;

    // No credential at all.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/team")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "Intruder"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Wrong token.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/team")
            .header(header::AUTHORIZATION, "Bearer wrong-token")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "Intruder"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let team = get_json(&app, "/api/v1/team").await;
    assert!(team.as_array().unwrap().is_empty());
}
