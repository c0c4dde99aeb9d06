use axum::{extract::{Query, State}, response::IntoResponse, Json};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dtos::responses::SlotsResponse;
use crate::error::AppError;
use crate::state::AppState;

const MAX_RANGE_DAYS: i64 = 92;

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date_str = params.get("date").ok_or(AppError::Validation("Date required".into()))?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let duration_min = state
        .booking_service
        .slot_duration_for(params.get("service_id").map(String::as_str))
        .await?;

    let slots = state.booking_service.available_slots(date, duration_min).await?;

    Ok(Json(SlotsResponse {
        date: date_str.to_string(),
        slots,
    }))
}

pub async fn get_available_dates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let start_str = params.get("start").ok_or(AppError::Validation("start required".into()))?;
    let end_str = params.get("end").ok_or(AppError::Validation("end required".into()))?;

    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid start".into()))?;
    let end = NaiveDate::parse_from_str(end_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid end".into()))?;

    if end < start {
        return Err(AppError::Validation("end must not precede start".into()));
    }
    if (end - start).num_days() > MAX_RANGE_DAYS {
        return Err(AppError::Validation("Date range too large".into()));
    }

    let duration_min = state
        .booking_service
        .slot_duration_for(params.get("service_id").map(String::as_str))
        .await?;

    let dates = state.booking_service.available_dates(start, end, duration_min).await?;
    Ok(Json(dates))
}
