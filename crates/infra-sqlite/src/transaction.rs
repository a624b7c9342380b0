// SQLite Transaction Implementation

use crate::error::map_sqlx_error;
use crate::queue_repository::QueueEntryRow;
use async_trait::async_trait;
use sqlx::{Sqlite, Transaction as SqlxTransaction};
use waitlist_core::domain::{QueueEntry, QueueStatus};
use waitlist_core::error::Result;
use waitlist_core::port::{QueueRepositoryTransaction, Transaction};

pub struct SqliteQueueTransaction<'a> {
    tx: SqlxTransaction<'a, Sqlite>,
}

impl<'a> SqliteQueueTransaction<'a> {
    pub fn new(tx: SqlxTransaction<'a, Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Transaction for SqliteQueueTransaction<'_> {
    async fn commit(mut self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn rollback(mut self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl QueueRepositoryTransaction for SqliteQueueTransaction<'_> {
    async fn find_waiting_entry(
        &mut self,
        user_id: &str,
        venue_id: &str,
    ) -> Result<Option<QueueEntry>> {
        // Duplicate waiting entries are possible; the earliest one wins
        let row: Option<QueueEntryRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, venue_id, position, status, joined_at, left_at
            FROM queues
            WHERE user_id = ? AND venue_id = ? AND status = ?
            ORDER BY position ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(venue_id)
        .bind(QueueStatus::Waiting.as_str())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        row.map(QueueEntryRow::try_into_entry).transpose()
    }

    async fn count_waiting_ahead(&mut self, venue_id: &str, position: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM queues WHERE venue_id = ? AND status = ? AND position < ?",
        )
        .bind(venue_id)
        .bind(QueueStatus::Waiting.as_str())
        .bind(position)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(count)
    }
}
