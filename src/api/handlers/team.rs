use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateTeamMemberRequest;
use crate::domain::models::team::TeamMember;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_team(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let team = state.team_repo.list().await?;
    Ok(Json(team))
}

pub async fn create_team_member(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTeamMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }

    let member = TeamMember::new(
        payload.name,
        payload.role,
        payload.bio,
        payload.show_on_home.unwrap_or(true),
    );

    let created = state.team_repo.create(&member).await?;
    info!("Team member created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn delete_team_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.team_repo.delete(&member_id).await?;
    info!("Team member deleted: {}", member_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
