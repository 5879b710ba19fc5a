use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateTeamMemberRequest;
use crate::api::extractors::editor::EditorToken;
use crate::domain::models::team_member::TeamMember;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_team_members(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.resolver.resolve_team_members().await)
}

pub async fn create_team_member(
    State(state): State<Arc<AppState>>,
    _editor: EditorToken,
    Json(payload): Json<CreateTeamMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = state.config.namespace()
        .ok_or_else(|| AppError::NotConfigured("Content namespace is not configured".into()))?;

    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name must not be empty".into()));
    }

    let mut member = TeamMember::new(dataset, payload.name);
    member.image_url = payload.image_url;
    member.role = payload.role;
    member.year = payload.year;
    member.blurb = payload.blurb;

    let created = state.team_repo.create(&member).await?;
    info!("Team member created: {}", created.id);
    Ok(Json(created))
}
