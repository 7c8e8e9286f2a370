//! API service routes

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

pub mod auth;
pub mod feedback;
pub mod listings;
pub mod requests;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/users", get(auth::list_users))
        .route(
            "/listings",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route(
            "/listings/:id",
            put(listings::update_listing).delete(listings::delete_listing),
        )
        .route(
            "/feedback",
            get(feedback::list_feedback).post(feedback::create_feedback),
        )
        .route(
            "/requests",
            get(requests::list_requests).post(requests::create_request),
        )
        .route("/requests/:id", put(requests::update_request_status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Body returned by every successful write
pub(crate) fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

/// Service status
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "reserva-backend",
        "message": "Reserva backend running"
    }))
}

/// Health check endpoint, pings the backing store
pub async fn health_check(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    if !state.storage.health_check().await {
        return Err(ApiError::Storage("Database unavailable"));
    }

    Ok(Json(json!({
        "status": "ok",
        "database": "ok"
    })))
}
