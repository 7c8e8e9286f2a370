//! Feedback model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::serde_helpers;

/// An unstructured user comment, append-only
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: Option<String>,
    pub msg: Option<String>,
}

/// Body of `POST /feedback`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFeedback {
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub msg: Option<String>,
}
