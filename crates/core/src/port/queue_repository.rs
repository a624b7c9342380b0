// Queue Repository Port (Interface)

use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for queue entry persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueRepository: Send + Sync {
    /// Count entries with status `waiting` at a venue
    async fn count_waiting(&self, venue_id: &str) -> Result<i64>;

    /// Insert a `waiting` entry at position (waiting count + 1).
    ///
    /// Count and insert must be one atomic store operation so concurrent
    /// joins never read the same count. Returns the assigned position.
    async fn enqueue(&self, user_id: &str, venue_id: &str, joined_at: i64) -> Result<i64>;

    /// Move every `waiting` entry of (user, venue) to `done`.
    /// Returns the number of rows affected.
    async fn mark_done(&self, user_id: &str, venue_id: &str, left_at: i64) -> Result<u64>;
}
