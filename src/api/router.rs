use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{availability, block, booking, health, service, team};
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Catalog
        .route("/api/v1/services", get(service::list_services).post(service::create_service))
        .route("/api/v1/services/{service_id}", put(service::update_service).delete(service::delete_service))

        // Team & day blocks
        .route("/api/v1/team", get(team::list_team).post(team::create_team_member))
        .route("/api/v1/team/{member_id}", delete(team::delete_team_member))
        .route("/api/v1/blocks", get(block::list_blocks).post(block::create_block))
        .route("/api/v1/blocks/{block_id}", delete(block::delete_block))

        // Public booking flow
        .route("/api/v1/availability/dates", get(availability::get_available_dates))
        .route("/api/v1/availability/slots", get(availability::get_slots))
        .route("/api/v1/bookings", post(booking::create_booking).get(booking::list_bookings))

        // Staff booking management
        .route("/api/v1/bookings/{booking_id}/status", put(booking::update_booking_status))
        .route("/api/v1/bookings/{booking_id}", put(booking::update_booking).delete(booking::delete_booking))

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
        .with_state(state)
}
