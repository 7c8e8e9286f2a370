//! Input validation utilities

use uuid::Uuid;

use crate::{error::ApiError, models::BookingStatus};

/// Return the value when it is present and non-empty
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse a requested booking status, rejecting anything outside the known states
pub fn parse_status(status: &Option<String>) -> Result<BookingStatus, ApiError> {
    present(status)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ApiError::Validation("Invalid status".to_string()))
}

/// Parse a path identity. Text that is not a UUID names no stored record.
pub fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}
