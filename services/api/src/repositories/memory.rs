//! In-process store implementing every collection trait
//!
//! Selected with `STORAGE_BACKEND=memory` and used by the HTTP tests. Data is
//! lost when the process exits.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::error::{StoreError, StoreResult};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BookingStore, FeedbackStore, ListingStore, UserStore};
use crate::models::{
    Booking, BookingStatus, Feedback, Listing, ListingPayload, NewBooking, NewFeedback, NewUser,
    Requester, User,
};

/// A booking as stored: the requester is kept as a bare id
#[derive(Debug, Clone)]
struct BookingRecord {
    id: Uuid,
    user_id: Option<Uuid>,
    user_name: Option<String>,
    vendor_name: Option<String>,
    vendor_type: Option<String>,
    phone: Option<String>,
    message: Option<String>,
    date: Option<String>,
    status: BookingStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookingRecord {
    fn resolve(&self, users: &[User]) -> Booking {
        let requester = self
            .user_id
            .and_then(|id| users.iter().find(|user| user.id == id))
            .map(|user| Requester {
                id: user.id,
                name: user.name.clone(),
                phone: user.phone.clone(),
            });

        Booking {
            id: self.id,
            requester,
            user_name: self.user_name.clone(),
            vendor_name: self.vendor_name.clone(),
            vendor_type: self.vendor_type.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            date: self.date.clone(),
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    listings: Vec<Listing>,
    feedback: Vec<Feedback>,
    bookings: Vec<BookingRecord>,
}

/// In-memory store. Clones share the same collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<Collections>>,
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, new_user: NewUser) -> StoreResult<User> {
        let mut collections = self.collections.write().await;

        if collections.users.iter().any(|u| u.phone == new_user.phone) {
            return Err(StoreError::Conflict("User already exists".to_string()));
        }

        let user = User::new(new_user);
        collections.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<User>> {
        let collections = self.collections.read().await;
        Ok(collections.users.iter().find(|u| u.phone == phone).cloned())
    }

    async fn get_all(&self) -> StoreResult<Vec<User>> {
        Ok(self.collections.read().await.users.clone())
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn get_all(&self) -> StoreResult<Vec<Listing>> {
        Ok(self.collections.read().await.listings.clone())
    }

    async fn create(&self, payload: ListingPayload) -> StoreResult<Listing> {
        let listing = Listing::new(Uuid::new_v4(), payload);
        self.collections.write().await.listings.push(listing.clone());
        Ok(listing)
    }

    async fn replace(&self, id: Uuid, payload: ListingPayload) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        match collections.listings.iter_mut().find(|l| l.id == id) {
            Some(listing) => {
                *listing = Listing::new(id, payload);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        let before = collections.listings.len();
        collections.listings.retain(|l| l.id != id);
        Ok(collections.listings.len() < before)
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn get_all(&self) -> StoreResult<Vec<Feedback>> {
        Ok(self.collections.read().await.feedback.clone())
    }

    async fn create(&self, feedback: NewFeedback) -> StoreResult<Feedback> {
        let feedback = Feedback {
            id: Uuid::new_v4(),
            name: feedback.name,
            msg: feedback.msg,
        };
        self.collections.write().await.feedback.push(feedback.clone());
        Ok(feedback)
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn create(&self, booking: NewBooking) -> StoreResult<Uuid> {
        let now = Utc::now();
        let record = BookingRecord {
            id: Uuid::new_v4(),
            user_id: booking.user_id,
            user_name: booking.user_name,
            vendor_name: booking.vendor_name,
            vendor_type: booking.vendor_type,
            phone: booking.phone,
            message: booking.message,
            date: booking.date,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let id = record.id;
        self.collections.write().await.bookings.push(record);
        Ok(id)
    }

    async fn get_all(&self) -> StoreResult<Vec<Booking>> {
        let collections = self.collections.read().await;

        // Reverse insertion order first so equal timestamps still list newest first
        let mut bookings: Vec<Booking> = collections
            .bookings
            .iter()
            .rev()
            .map(|record| record.resolve(&collections.users))
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(bookings)
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        match collections.bookings.iter_mut().find(|b| b.id == id) {
            Some(record) => {
                record.status = status;
                record.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
