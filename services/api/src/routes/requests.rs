//! Booking request endpoints

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use tracing::{debug, error, info};

use super::success;
use crate::{
    error::{ApiError, ApiResult},
    models::{NewBooking, StatusUpdate},
    state::AppState,
    validation::{parse_id, parse_status},
};

/// Submit a booking request. It always starts out pending.
pub async fn create_request(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<NewBooking>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    state.storage.bookings.create(payload).await.map_err(|e| {
        error!("Failed to create booking request: {}", e);
        ApiError::Storage("Failed to create request")
    })?;

    Ok(success())
}

/// Get all booking requests, newest first
pub async fn list_requests(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let bookings = state.storage.bookings.get_all().await.map_err(|e| {
        error!("Failed to get booking requests: {}", e);
        ApiError::Storage("Failed to fetch requests")
    })?;

    Ok(Json(bookings))
}

/// Set the status of a booking request. An unknown id is a successful no-op.
pub async fn update_request_status(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<StatusUpdate>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let status = parse_status(&payload.status)?;

    let Some(request_id) = parse_id(&id) else {
        debug!("Booking request id {:?} is not a stored identity, nothing updated", id);
        return Ok(success());
    };

    let updated = state
        .storage
        .bookings
        .update_status(request_id, status)
        .await
        .map_err(|e| {
            error!("Failed to update booking request status: {}", e);
            ApiError::Storage("Failed to update request")
        })?;

    if updated {
        info!("Booking request {} set to {}", id, status);
    } else {
        debug!("Booking request {} not found, nothing updated", id);
    }

    Ok(success())
}
