use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateBookingRequest, UpdateBookingRequest, UpdateBookingStatusRequest};
use crate::api::dtos::responses::BookingCreatedResponse;
use crate::domain::models::booking::{is_valid_status, is_valid_transition};
use crate::domain::services::booking_service::SubmitBookingParams;
use crate::domain::services::schedule::{self, slots_for_day};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let submitted = state
        .booking_service
        .submit(SubmitBookingParams {
            service_id: payload.service_id,
            date: payload.date,
            time: payload.time,
            client_name: payload.client_name,
            client_phone: payload.client_phone,
            payment_method: payload.payment_method,
        })
        .await?;

    Ok(Json(BookingCreatedResponse {
        booking: submitted.booking,
        whatsapp_link: submitted.whatsapp_link,
    }))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = match params.get("date") {
        Some(date_str) => {
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map_err(|_| AppError::Validation("Invalid date format".into()))?;

            let tz = state.booking_service.schedule().timezone;
            let day_start = tz
                .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
                .single()
                .unwrap()
                .with_timezone(&Utc);
            let day_end = tz
                .from_local_datetime(&date.and_hms_opt(23, 59, 59).unwrap())
                .single()
                .unwrap()
                .with_timezone(&Utc);

            state.booking_repo.list_by_range(day_start, day_end).await?
        }
        None => state.booking_repo.list().await?,
    };

    Ok(Json(bookings))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_status(&payload.status) {
        return Err(AppError::Validation("Unknown booking status".into()));
    }

    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if !is_valid_transition(&booking.status, &payload.status) {
        return Err(AppError::Conflict(format!(
            "Cannot transition booking from '{}' to '{}'",
            booking.status, payload.status
        )));
    }

    let updated = state.booking_repo.update_status(&booking_id, &payload.status).await?;
    info!("Booking {} moved to status '{}'", updated.id, updated.status);
    Ok(Json(updated))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if let Some(name) = payload.client_name { booking.client_name = name; }
    if let Some(phone) = payload.client_phone { booking.client_phone = phone; }

    if let Some(method) = payload.payment_method {
        match method.as_str() {
            "cash" | "card" => booking.payment_method = method,
            _ => return Err(AppError::Validation("Invalid payment method".into())),
        }
    }

    if let Some(professional_id) = payload.professional_id {
        if professional_id.is_empty() {
            booking.professional_id = None;
        } else {
            state.team_repo.find_by_id(&professional_id).await?
                .ok_or(AppError::NotFound("Team member not found".into()))?;
            booking.professional_id = Some(professional_id);
        }
    }

    if let (Some(date_str), Some(time_str)) = (payload.date, payload.time) {
        let config = state.booking_service.schedule();
        let tz = config.timezone;

        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date".into()))?;
        let time = NaiveTime::parse_from_str(&time_str, "%H:%M")
            .map_err(|_| AppError::Validation("Invalid time".into()))?;

        if schedule::is_closed_weekday(date, &config.closed_weekdays)
            || schedule::is_holiday(date, &config.holidays) {
            return Err(AppError::Conflict("The salon is closed on the target day".into()));
        }
        if !slots_for_day(date, config).contains(&time_str) {
            return Err(AppError::Conflict("Target time is not a bookable slot".into()));
        }

        // Staff moves skip the capacity gate: deliberate double-booking is
        // the back office's call.
        booking.date = tz
            .from_local_datetime(&date.and_time(time))
            .single()
            .ok_or(AppError::Validation("Invalid local time".into()))?
            .fixed_offset();
        booking.time = time_str;
    }

    let updated = state.booking_repo.update(&booking).await?;
    info!("Booking updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_repo.delete(&booking_id).await?;
    info!("Booking deleted: {}", booking_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
