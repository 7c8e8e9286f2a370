//! Repositories for database operations
//!
//! Each collection sits behind an async trait so handlers stay agnostic of the
//! backing store. PostgreSQL repositories live in the submodules named after
//! their table; `memory` holds the in-process store.

use std::sync::Arc;

use async_trait::async_trait;
use common::error::StoreResult;
use sqlx::{PgPool, migrate::Migrator};
use uuid::Uuid;

use crate::models::{
    Booking, BookingStatus, Feedback, Listing, ListingPayload, NewBooking, NewFeedback, NewUser,
    User,
};

pub mod booking;
pub mod feedback;
pub mod listing;
pub mod memory;
pub mod user;

pub use booking::BookingRepository;
pub use feedback::FeedbackRepository;
pub use listing::ListingRepository;
pub use memory::MemoryStore;
pub use user::UserRepository;

/// Schema migrations embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Users collection
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; a phone that is already registered yields `StoreError::Conflict`
    async fn create(&self, new_user: NewUser) -> StoreResult<User>;

    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<User>>;

    /// All users, oldest first
    async fn get_all(&self) -> StoreResult<Vec<User>>;
}

/// Listings collection
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// All listings in insertion order
    async fn get_all(&self) -> StoreResult<Vec<Listing>>;

    async fn create(&self, payload: ListingPayload) -> StoreResult<Listing>;

    /// Overwrite every field of a listing. Returns false when the id is unknown.
    async fn replace(&self, id: Uuid, payload: ListingPayload) -> StoreResult<bool>;

    /// Returns false when the id is unknown
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

/// Feedback collection, append-only
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn get_all(&self) -> StoreResult<Vec<Feedback>>;

    async fn create(&self, feedback: NewFeedback) -> StoreResult<Feedback>;
}

/// Booking requests collection
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a request with status `Pending`, returning its id
    async fn create(&self, booking: NewBooking) -> StoreResult<Uuid>;

    /// All requests, newest first, requester reference resolved
    async fn get_all(&self) -> StoreResult<Vec<Booking>>;

    /// Returns false when the id is unknown
    async fn update_status(&self, id: Uuid, status: BookingStatus) -> StoreResult<bool>;
}

/// The set of collections handlers work against
#[derive(Clone)]
pub struct Storage {
    pub users: Arc<dyn UserStore>,
    pub listings: Arc<dyn ListingStore>,
    pub feedback: Arc<dyn FeedbackStore>,
    pub bookings: Arc<dyn BookingStore>,
    pool: Option<PgPool>,
}

impl Storage {
    /// PostgreSQL-backed storage
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            listings: Arc::new(ListingRepository::new(pool.clone())),
            feedback: Arc::new(FeedbackRepository::new(pool.clone())),
            bookings: Arc::new(BookingRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// In-process storage, empty on creation
    pub fn in_memory() -> Self {
        let store = MemoryStore::default();
        Self::from_stores(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    /// Storage over arbitrary store implementations, without a pool to health-check
    pub fn from_stores(
        users: Arc<dyn UserStore>,
        listings: Arc<dyn ListingStore>,
        feedback: Arc<dyn FeedbackStore>,
        bookings: Arc<dyn BookingStore>,
    ) -> Self {
        Self {
            users,
            listings,
            feedback,
            bookings,
            pool: None,
        }
    }

    /// Whether the backing store is reachable
    pub async fn health_check(&self) -> bool {
        match &self.pool {
            Some(pool) => common::database::health_check(pool).await.unwrap_or(false),
            None => true,
        }
    }
}
