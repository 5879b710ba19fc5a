use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{events, health, site, team};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Public site reads
        .route("/api/v1/site-settings", get(site::get_site_settings).put(site::update_site_settings))
        .route("/api/v1/mission", get(site::get_mission_page).put(site::update_mission_page))
        .route("/api/v1/team", get(team::list_team_members).post(team::create_team_member))
        .route("/api/v1/events/upcoming", get(events::list_upcoming_events))
        .route("/api/v1/events/past", get(events::list_past_events))

        // Editor surface
        .route("/api/v1/events", post(events::create_event))
        .route("/api/v1/events/{event_id}", delete(events::delete_event))
        .route("/api/v1/past-events", post(events::create_past_event))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        // The site frontend is served from a different origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
