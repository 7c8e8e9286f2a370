//! HTTP behaviour when the backing store fails
//!
//! Every collection is served by a store whose operations all return a
//! database error, so each handler has to answer with its own 500 message.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::error::{StoreError, StoreResult};
use http_body_util::BodyExt;
use reserva_api::{
    AppState,
    models::{
        Booking, BookingStatus, Feedback, Listing, ListingPayload, NewBooking, NewFeedback,
        NewUser, User,
    },
    repositories::{BookingStore, FeedbackStore, ListingStore, Storage, UserStore},
    routes::create_router,
};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

struct FailingStore;

fn closed<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolClosed))
}

#[async_trait]
impl UserStore for FailingStore {
    async fn create(&self, _new_user: NewUser) -> StoreResult<User> {
        closed()
    }

    async fn find_by_phone(&self, _phone: &str) -> StoreResult<Option<User>> {
        closed()
    }

    async fn get_all(&self) -> StoreResult<Vec<User>> {
        closed()
    }
}

#[async_trait]
impl ListingStore for FailingStore {
    async fn get_all(&self) -> StoreResult<Vec<Listing>> {
        closed()
    }

    async fn create(&self, _payload: ListingPayload) -> StoreResult<Listing> {
        closed()
    }

    async fn replace(&self, _id: Uuid, _payload: ListingPayload) -> StoreResult<bool> {
        closed()
    }

    async fn delete(&self, _id: Uuid) -> StoreResult<bool> {
        closed()
    }
}

#[async_trait]
impl FeedbackStore for FailingStore {
    async fn get_all(&self) -> StoreResult<Vec<Feedback>> {
        closed()
    }

    async fn create(&self, _feedback: NewFeedback) -> StoreResult<Feedback> {
        closed()
    }
}

#[async_trait]
impl BookingStore for FailingStore {
    async fn create(&self, _booking: NewBooking) -> StoreResult<Uuid> {
        closed()
    }

    async fn get_all(&self) -> StoreResult<Vec<Booking>> {
        closed()
    }

    async fn update_status(&self, _id: Uuid, _status: BookingStatus) -> StoreResult<bool> {
        closed()
    }
}

fn app() -> Router {
    let store = Arc::new(FailingStore);
    let storage = Storage::from_stores(store.clone(), store.clone(), store.clone(), store);
    create_router(AppState::new(storage, "9999999999"))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn assert_storage_error(method: Method, uri: &str, body: Option<Value>, message: &str) {
    let app = app();
    let (status, body) = send(&app, method, uri, body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
    assert_eq!(body, json!({ "error": message }));
}

#[tokio::test]
async fn test_listing_failures_are_server_errors() {
    let id = Uuid::new_v4();
    assert_storage_error(Method::GET, "/listings", None, "Failed to fetch listings").await;
    assert_storage_error(
        Method::POST,
        "/listings",
        Some(json!({ "name": "Grand Hall" })),
        "Failed to create listing",
    )
    .await;
    assert_storage_error(
        Method::PUT,
        &format!("/listings/{}", id),
        Some(json!({ "name": "Grand Hall" })),
        "Failed to update listing",
    )
    .await;
    assert_storage_error(
        Method::DELETE,
        &format!("/listings/{}", id),
        None,
        "Failed to delete listing",
    )
    .await;
}

#[tokio::test]
async fn test_auth_failures_are_server_errors() {
    assert_storage_error(
        Method::POST,
        "/auth/register",
        Some(json!({ "name": "Asha", "phone": "0123456789", "password": "secret" })),
        "Failed to register user",
    )
    .await;
    assert_storage_error(
        Method::POST,
        "/auth/login",
        Some(json!({ "phone": "0123456789", "password": "secret" })),
        "Failed to log in",
    )
    .await;
    assert_storage_error(Method::GET, "/users", None, "Failed to fetch users").await;
}

#[tokio::test]
async fn test_feedback_failures_are_server_errors() {
    assert_storage_error(Method::GET, "/feedback", None, "Failed to fetch feedback").await;
    assert_storage_error(
        Method::POST,
        "/feedback",
        Some(json!({ "name": "Asha", "msg": "Lovely venue" })),
        "Failed to submit feedback",
    )
    .await;
}

#[tokio::test]
async fn test_request_failures_are_server_errors() {
    assert_storage_error(Method::GET, "/requests", None, "Failed to fetch requests").await;
    assert_storage_error(
        Method::POST,
        "/requests",
        Some(json!({ "userName": "Ravi", "vendorName": "Grand Hall" })),
        "Failed to create request",
    )
    .await;
    assert_storage_error(
        Method::PUT,
        &format!("/requests/{}", Uuid::new_v4()),
        Some(json!({ "status": "accepted" })),
        "Failed to update request",
    )
    .await;
}

#[tokio::test]
async fn test_validation_runs_before_storage() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        Some(json!({ "name": "Asha" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "All fields required" }));
}
