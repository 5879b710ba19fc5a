use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// Guard for the editor surface. Writes require the shared content write
/// token as a bearer credential; when no token is configured the whole
/// editor API is unavailable.
pub struct EditorToken;

impl<S> FromRequestParts<S> for EditorToken
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let Some(expected) = app_state.config.write_token.clone() else {
            return Err(AppError::NotConfigured("Write access is not configured".into()));
        };

        let provided = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized)?;

        if provided != expected {
            return Err(AppError::Unauthorized);
        }

        Ok(EditorToken)
    }
}
