// SQLite QueueRepository Implementation

use crate::error::map_sqlx_error;
use crate::SqliteQueueTransaction;
use async_trait::async_trait;
use sqlx::SqlitePool;
use waitlist_core::domain::{QueueEntry, QueueStatus};
use waitlist_core::error::Result;
use waitlist_core::port::{QueueRepository, QueueRepositoryTransaction, TransactionalQueueRepository};

pub struct SqliteQueueRepository {
    pool: SqlitePool,
}

impl SqliteQueueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueueRepository for SqliteQueueRepository {
    async fn count_waiting(&self, venue_id: &str) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM queues WHERE venue_id = ? AND status = ?")
                .bind(venue_id)
                .bind(QueueStatus::Waiting.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(count)
    }

    async fn enqueue(&self, user_id: &str, venue_id: &str, joined_at: i64) -> Result<i64> {
        // Count and insert in one statement: SQLite holds the write lock for
        // its whole duration, so concurrent joins cannot read the same count
        let position: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO queues (user_id, venue_id, position, status, joined_at)
            SELECT ?, ?, COUNT(*) + 1, ?, ?
            FROM queues
            WHERE venue_id = ? AND status = ?
            RETURNING position
            "#,
        )
        .bind(user_id)
        .bind(venue_id)
        .bind(QueueStatus::Waiting.as_str())
        .bind(joined_at)
        .bind(venue_id)
        .bind(QueueStatus::Waiting.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(position)
    }

    async fn mark_done(&self, user_id: &str, venue_id: &str, left_at: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE queues
            SET status = ?, left_at = ?
            WHERE user_id = ? AND venue_id = ? AND status = ?
            "#,
        )
        .bind(QueueStatus::Done.as_str())
        .bind(left_at)
        .bind(user_id)
        .bind(venue_id)
        .bind(QueueStatus::Waiting.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl TransactionalQueueRepository for SqliteQueueRepository {
    async fn begin_transaction(&self) -> Result<Box<dyn QueueRepositoryTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteQueueTransaction::new(tx)))
    }
}

/// SQLite row representation of a queue entry
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct QueueEntryRow {
    id: i64,
    user_id: String,
    venue_id: String,
    position: i64,
    status: String,
    joined_at: i64,
    left_at: Option<i64>,
}

impl QueueEntryRow {
    pub(crate) fn try_into_entry(self) -> Result<QueueEntry> {
        let status: QueueStatus = self.status.parse()?;

        Ok(QueueEntry {
            id: self.id,
            user_id: self.user_id,
            venue_id: self.venue_id,
            position: self.position,
            status,
            joined_at: self.joined_at,
            left_at: self.left_at,
        })
    }
}
