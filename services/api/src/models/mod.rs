//! API models for stored entities and request/response payloads

pub mod booking;
pub mod feedback;
pub mod listing;
pub mod serde_helpers;
pub mod user;

use thiserror::Error;

// Re-export for convenience
pub use booking::{Booking, BookingRow, BookingStatus, NewBooking, Requester, StatusUpdate};
pub use feedback::{Feedback, NewFeedback};
pub use listing::{Listing, ListingPayload};
pub use user::{LoginRequest, LoginResponse, NewUser, RegisterRequest, User, UserRole};

/// A stored or submitted value that is not one of an enum's known states
#[derive(Debug, Error)]
#[error("invalid {field}: {value:?}")]
pub struct ParseEnumError {
    field: &'static str,
    value: String,
}

impl ParseEnumError {
    pub fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}
