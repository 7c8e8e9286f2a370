//! Listing model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::serde_helpers;

/// A bookable venue or vendor shown in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub listing_type: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub contact: Option<String>,
    pub map: Option<String>,
    pub features: Option<String>,
}

impl Listing {
    pub fn new(id: Uuid, payload: ListingPayload) -> Self {
        Self {
            id,
            listing_type: payload.listing_type,
            name: payload.name,
            price: payload.price,
            contact: payload.contact,
            map: payload.map,
            features: payload.features,
        }
    }
}

/// Listing fields accepted on create and full overwrite
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingPayload {
    #[serde(rename = "type", default, deserialize_with = "serde_helpers::string")]
    pub listing_type: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub map: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub features: Option<String>,
}
