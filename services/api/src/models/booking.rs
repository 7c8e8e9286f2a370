//! Booking request model and its status workflow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::{ParseEnumError, serde_helpers};

/// Booking status. New requests always start as `Pending`; any state may be
/// set to any other afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "accepted" => Ok(BookingStatus::Accepted),
            "rejected" => Ok(BookingStatus::Rejected),
            other => Err(ParseEnumError::new("status", other)),
        }
    }
}

impl TryFrom<String> for BookingStatus {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Body of `POST /requests`. A `status` field, if sent, is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: Option<Uuid>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub vendor_name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub vendor_type: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub date: Option<String>,
}

/// Body of `PUT /requests/:id`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusUpdate {
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub status: Option<String>,
}

/// The registered user a booking was made by
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Requester {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub phone: String,
}

/// A booking request as listed, with the requester reference resolved
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub requester: Option<Requester>,
    pub user_name: Option<String>,
    pub vendor_name: Option<String>,
    pub vendor_type: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row shape of the `requests LEFT JOIN users` listing query
#[derive(Debug, FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    pub requester_id: Option<Uuid>,
    pub requester_name: Option<String>,
    pub requester_phone: Option<String>,
    pub user_name: Option<String>,
    pub vendor_name: Option<String>,
    pub vendor_type: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        let requester = match (row.requester_id, row.requester_name, row.requester_phone) {
            (Some(id), Some(name), Some(phone)) => Some(Requester { id, name, phone }),
            _ => None,
        };

        Booking {
            id: row.id,
            requester,
            user_name: row.user_name,
            vendor_name: row.vendor_name,
            vendor_type: row.vendor_type,
            phone: row.phone,
            message: row.message,
            date: row.date,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
