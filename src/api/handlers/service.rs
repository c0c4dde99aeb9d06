use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateServiceRequest, UpdateServiceRequest};
use crate::domain::models::service::{NewServiceParams, Service};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let services = state.service_repo.list().await?;
    Ok(Json(services))
}

pub async fn create_service(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Service name is required".into()));
    }
    if payload.price < 0 {
        return Err(AppError::Validation("Price cannot be negative".into()));
    }

    let service = Service::new(NewServiceParams {
        name: payload.name,
        name_en: payload.name_en,
        price: payload.price,
        duration: payload.duration,
        category: payload.category,
        description: payload.description,
        sort_order: payload.sort_order.unwrap_or(0),
    });

    let created = state.service_repo.create(&service).await?;
    info!("Service created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn update_service(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut service = state.service_repo.find_by_id(&service_id).await?
        .ok_or(AppError::NotFound("Service not found".into()))?;

    if let Some(name) = payload.name { service.name = name; }
    if let Some(name_en) = payload.name_en { service.name_en = Some(name_en); }
    if let Some(price) = payload.price {
        if price < 0 {
            return Err(AppError::Validation("Price cannot be negative".into()));
        }
        service.price = price;
    }
    if let Some(duration) = payload.duration { service.duration = duration; }
    if let Some(category) = payload.category { service.category = category; }
    if let Some(description) = payload.description { service.description = Some(description); }
    if let Some(sort_order) = payload.sort_order { service.sort_order = sort_order; }

    let updated = state.service_repo.update(&service).await?;
    info!("Service updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.service_repo.delete(&service_id).await?;
    info!("Service deleted: {}", service_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
