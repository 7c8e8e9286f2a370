//! Listing repository for database operations

use async_trait::async_trait;
use common::error::StoreResult;
use sqlx::PgPool;
use uuid::Uuid;

use super::ListingStore;
use crate::models::{Listing, ListingPayload};

/// Listing repository
#[derive(Clone)]
pub struct ListingRepository {
    pool: PgPool,
}

impl ListingRepository {
    /// Create a new listing repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingStore for ListingRepository {
    async fn get_all(&self) -> StoreResult<Vec<Listing>> {
        let listings = sqlx::query_as::<_, Listing>(
            r#"
            SELECT id, type, name, price, contact, map, features
            FROM listings
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(listings)
    }

    async fn create(&self, payload: ListingPayload) -> StoreResult<Listing> {
        let listing = Listing::new(Uuid::new_v4(), payload);

        sqlx::query(
            r#"
            INSERT INTO listings (id, type, name, price, contact, map, features)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(listing.id)
        .bind(&listing.listing_type)
        .bind(&listing.name)
        .bind(listing.price)
        .bind(&listing.contact)
        .bind(&listing.map)
        .bind(&listing.features)
        .execute(&self.pool)
        .await?;

        Ok(listing)
    }

    async fn replace(&self, id: Uuid, payload: ListingPayload) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE listings
            SET type = $2, name = $3, price = $4, contact = $5, map = $6, features = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&payload.listing_type)
        .bind(&payload.name)
        .bind(payload.price)
        .bind(&payload.contact)
        .bind(&payload.map)
        .bind(&payload.features)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
