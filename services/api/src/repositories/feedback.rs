//! Feedback repository for database operations

use async_trait::async_trait;
use common::error::StoreResult;
use sqlx::PgPool;
use uuid::Uuid;

use super::FeedbackStore;
use crate::models::{Feedback, NewFeedback};

/// Feedback repository
#[derive(Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for FeedbackRepository {
    async fn get_all(&self) -> StoreResult<Vec<Feedback>> {
        let feedback = sqlx::query_as::<_, Feedback>(
            r#"
            SELECT id, name, msg
            FROM feedback
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(feedback)
    }

    async fn create(&self, feedback: NewFeedback) -> StoreResult<Feedback> {
        let feedback = Feedback {
            id: Uuid::new_v4(),
            name: feedback.name,
            msg: feedback.msg,
        };

        sqlx::query("INSERT INTO feedback (id, name, msg) VALUES ($1, $2, $3)")
            .bind(feedback.id)
            .bind(&feedback.name)
            .bind(&feedback.msg)
            .execute(&self.pool)
            .await?;

        Ok(feedback)
    }
}
