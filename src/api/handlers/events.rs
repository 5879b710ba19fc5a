use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreatePastEventRequest, CreateUpcomingEventRequest};
use crate::api::extractors::editor::EditorToken;
use crate::domain::models::{past_event::PastEvent, upcoming_event::UpcomingEvent};
use crate::error::AppError;
use crate::state::AppState;

/// Calendar feed: events dated today or later.
pub async fn list_upcoming_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.resolver.resolve_upcoming_events().await)
}

/// Gallery feed. This read also runs the archive pass that migrates
/// ended upcoming events into the past collection.
pub async fn list_past_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.archiver.resolve_past_events().await)
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    _editor: EditorToken,
    Json(payload): Json<CreateUpcomingEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = require_namespace(&state)?;

    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".into()));
    }
    validate_date(payload.date.as_deref())?;

    let mut event = UpcomingEvent::new(dataset, payload.title, payload.date);
    event.time = payload.time;
    event.location = payload.location;
    event.description = payload.description;
    event.rsvp_link = payload.rsvp_link;

    let created = state.upcoming_repo.create(&event).await?;
    info!("Upcoming event created: {}", created.id);
    Ok(Json(created))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    _editor: EditorToken,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = require_namespace(&state)?;

    state.upcoming_repo.find_by_id(&dataset, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    state.upcoming_repo.delete(&dataset, &event_id).await?;
    info!("Upcoming event deleted: {}", event_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn create_past_event(
    State(state): State<Arc<AppState>>,
    _editor: EditorToken,
    Json(payload): Json<CreatePastEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = require_namespace(&state)?;

    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".into()));
    }
    validate_date(payload.date.as_deref())?;

    let mut event = PastEvent::new(dataset, payload.title, payload.date);
    event.description = payload.description;
    event.image_urls = payload.image_urls;
    event.source_event_id = payload.source_event_id;

    let created = state.past_repo.create(&event).await?;
    info!("Past event created: {}", created.id);
    Ok(Json(created))
}

fn require_namespace(state: &AppState) -> Result<String, AppError> {
    state.config.namespace()
        .ok_or_else(|| AppError::NotConfigured("Content namespace is not configured".into()))
}

fn validate_date(date: Option<&str>) -> Result<(), AppError> {
    if let Some(d) = date {
        NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Date must be YYYY-MM-DD".into()))?;
    }
    Ok(())
}
