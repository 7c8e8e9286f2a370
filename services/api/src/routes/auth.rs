//! Registration, login and the user listing

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use common::error::StoreError;
use tracing::{debug, error, info};

use super::success;
use crate::{
    error::{ApiError, ApiResult},
    models::{LoginRequest, LoginResponse, NewUser, RegisterRequest, UserRole},
    password,
    state::AppState,
    validation::present,
};

/// User registration endpoint
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<RegisterRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let (Some(name), Some(phone), Some(password)) = (
        present(&payload.name),
        present(&payload.phone),
        present(&payload.password),
    ) else {
        return Err(ApiError::Validation("All fields required".to_string()));
    };

    info!("Registration attempt for phone: {}", phone);

    let existing = state
        .storage
        .users
        .find_by_phone(phone)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::Storage("Failed to register user")
        })?;

    if existing.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = password::hash_password(password).map_err(|e| {
        error!("Failed to hash password: {}", e);
        ApiError::Storage("Failed to register user")
    })?;

    let new_user = NewUser {
        name: name.to_string(),
        phone: phone.to_string(),
        password_hash,
        role: UserRole::for_phone(phone, &state.admin_phone),
    };

    state
        .storage
        .users
        .create(new_user)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(message) => ApiError::Conflict(message),
            other => {
                error!("Failed to create user: {}", other);
                ApiError::Storage("Failed to register user")
            }
        })?;

    Ok(success())
}

/// User login endpoint
///
/// Unknown phone, wrong password and an unreadable body all produce the same
/// response.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Unreadable login body: {}", rejection.body_text());
        ApiError::InvalidCredentials
    })?;

    let (Some(phone), Some(password)) = (present(&payload.phone), present(&payload.password))
    else {
        return Err(ApiError::InvalidCredentials);
    };

    info!("Login attempt for phone: {}", phone);

    let user = state
        .storage
        .users
        .find_by_phone(phone)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::Storage("Failed to log in")
        })?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify_password(password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(LoginResponse {
        user_id: user.id,
        name: user.name,
        role: user.role,
    }))
}

/// Get all registered users, password hashes excluded
pub async fn list_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.storage.users.get_all().await.map_err(|e| {
        error!("Failed to get users: {}", e);
        ApiError::Storage("Failed to fetch users")
    })?;

    Ok(Json(users))
}
