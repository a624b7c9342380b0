// Transaction port for consistent multi-step reads

use crate::domain::QueueEntry;
use crate::error::Result;
use async_trait::async_trait;

/// Transaction trait for atomic multi-step operations
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Transactional QueueRepository operations
#[async_trait]
pub trait TransactionalQueueRepository: Send + Sync {
    /// Begin a new transaction
    async fn begin_transaction(&self) -> Result<Box<dyn QueueRepositoryTransaction>>;
}

/// QueueRepository operations within a transaction
#[async_trait]
pub trait QueueRepositoryTransaction: Transaction {
    /// Earliest `waiting` entry of (user, venue), if any
    async fn find_waiting_entry(
        &mut self,
        user_id: &str,
        venue_id: &str,
    ) -> Result<Option<QueueEntry>>;

    /// Count `waiting` entries at a venue with a smaller position
    async fn count_waiting_ahead(&mut self, venue_id: &str, position: i64) -> Result<i64>;
}
