use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{UpdateMissionPageRequest, UpdateSiteSettingsRequest};
use crate::api::extractors::editor::EditorToken;
use crate::domain::models::site_content::{MissionPage, SiteSettings};
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_site_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.resolver.resolve_site_settings().await)
}

pub async fn update_site_settings(
    State(state): State<Arc<AppState>>,
    _editor: EditorToken,
    Json(payload): Json<UpdateSiteSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = require_namespace(&state)?;

    let settings = SiteSettings {
        groupme_link: payload.groupme_link,
        email: payload.email,
    };
    state.site_repo.upsert_settings(&dataset, &settings).await?;
    info!("Site settings updated");
    Ok(Json(settings))
}

pub async fn get_mission_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.resolver.resolve_mission_page().await)
}

pub async fn update_mission_page(
    State(state): State<Arc<AppState>>,
    _editor: EditorToken,
    Json(payload): Json<UpdateMissionPageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = require_namespace(&state)?;

    let page = MissionPage {
        headline: payload.headline,
        mission_paragraph_1: payload.mission_paragraph_1,
        mission_paragraph_2: payload.mission_paragraph_2,
        core_goals: payload.core_goals,
    };
    state.site_repo.upsert_mission_page(&dataset, &page).await?;
    info!("Mission page updated");
    Ok(Json(page))
}

fn require_namespace(state: &AppState) -> Result<String, AppError> {
    state.config.namespace()
        .ok_or_else(|| AppError::NotConfigured("Content namespace is not configured".into()))
}
