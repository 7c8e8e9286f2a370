//! Listing catalog endpoints

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use tracing::{debug, error};

use super::success;
use crate::{
    error::{ApiError, ApiResult},
    models::ListingPayload,
    state::AppState,
    validation::parse_id,
};

/// Get all listings
pub async fn list_listings(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let listings = state.storage.listings.get_all().await.map_err(|e| {
        error!("Failed to get listings: {}", e);
        ApiError::Storage("Failed to fetch listings")
    })?;

    Ok(Json(listings))
}

/// Create a listing from the submitted fields
pub async fn create_listing(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ListingPayload>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    state.storage.listings.create(payload).await.map_err(|e| {
        error!("Failed to create listing: {}", e);
        ApiError::Storage("Failed to create listing")
    })?;

    Ok(success())
}

/// Overwrite a listing. An unknown id is a successful no-op.
pub async fn update_listing(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<ListingPayload>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let Some(listing_id) = parse_id(&id) else {
        debug!("Listing id {:?} is not a stored identity, nothing updated", id);
        return Ok(success());
    };

    let updated = state
        .storage
        .listings
        .replace(listing_id, payload)
        .await
        .map_err(|e| {
            error!("Failed to update listing: {}", e);
            ApiError::Storage("Failed to update listing")
        })?;

    if !updated {
        debug!("Listing {} not found, nothing updated", id);
    }

    Ok(success())
}

/// Delete a listing. An unknown id is a successful no-op.
pub async fn delete_listing(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let Some(listing_id) = parse_id(&id) else {
        debug!("Listing id {:?} is not a stored identity, nothing deleted", id);
        return Ok(success());
    };

    let deleted = state.storage.listings.delete(listing_id).await.map_err(|e| {
        error!("Failed to delete listing: {}", e);
        ApiError::Storage("Failed to delete listing")
    })?;

    if !deleted {
        debug!("Listing {} not found, nothing deleted", id);
    }

    Ok(success())
}
