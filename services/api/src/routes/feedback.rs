//! Feedback endpoints

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::WithRejection;
use tracing::error;

use super::success;
use crate::{
    error::{ApiError, ApiResult},
    models::NewFeedback,
    state::AppState,
};

pub async fn list_feedback(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let feedback = state.storage.feedback.get_all().await.map_err(|e| {
        error!("Failed to get feedback: {}", e);
        ApiError::Storage("Failed to fetch feedback")
    })?;

    Ok(Json(feedback))
}

pub async fn create_feedback(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<NewFeedback>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    state.storage.feedback.create(payload).await.map_err(|e| {
        error!("Failed to create feedback: {}", e);
        ApiError::Storage("Failed to submit feedback")
    })?;

    Ok(success())
}
