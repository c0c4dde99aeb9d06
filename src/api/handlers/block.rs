use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateBlockRequest;
use crate::domain::models::team::ProfessionalBlock;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_blocks(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let blocks = state.block_repo.list().await?;
    Ok(Json(blocks))
}

pub async fn create_block(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBlockRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.team_repo.find_by_id(&payload.professional_id).await?
        .ok_or(AppError::NotFound("Team member not found".into()))?;

    let block = ProfessionalBlock::new(payload.professional_id, payload.date);
    let created = state.block_repo.create(&block).await?;
    info!("Professional {} blocked on {}", created.professional_id, created.date);
    Ok(Json(created))
}

pub async fn delete_block(
    State(state): State<Arc<AppState>>,
    Path(block_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.block_repo.delete(&block_id).await?;
    info!("Block deleted: {}", block_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
