//! Booking request repository for database operations

use async_trait::async_trait;
use chrono::Utc;
use common::error::StoreResult;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::BookingStore;
use crate::models::{Booking, BookingRow, BookingStatus, NewBooking};

/// Booking request repository, backed by the `requests` table
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn create(&self, booking: NewBooking) -> StoreResult<Uuid> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO requests (
                id, user_id, user_name, vendor_name, vendor_type, phone, message, date,
                status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            "#,
        )
        .bind(id)
        .bind(booking.user_id)
        .bind(&booking.user_name)
        .bind(&booking.vendor_name)
        .bind(&booking.vendor_type)
        .bind(&booking.phone)
        .bind(&booking.message)
        .bind(&booking.date)
        .bind(BookingStatus::Pending.as_str())
        .bind(now)
        .execute(&self.pool)
        .await?;

        info!("Created booking request {}", id);
        Ok(id)
    }

    async fn get_all(&self) -> StoreResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT r.id,
                   u.id AS requester_id, u.name AS requester_name, u.phone AS requester_phone,
                   r.user_name, r.vendor_name, r.vendor_type, r.phone, r.message, r.date,
                   r.status, r.created_at, r.updated_at
            FROM requests r
            LEFT JOIN users u ON u.id = r.user_id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE requests
            SET status = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
