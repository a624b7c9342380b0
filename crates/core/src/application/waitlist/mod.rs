// Waitlist Service - Core use cases for the per-venue waiting queue

pub mod join;
pub mod leave;
pub mod overview;
pub mod status;
mod validate;

pub use overview::QueueOverview;
pub use status::QueueStanding;

use crate::error::Result;
use crate::port::{QueueRepository, TimeProvider, TransactionalQueueRepository};
use std::sync::Arc;

/// Waitlist Service
pub struct WaitlistService {
    queue_repo: Arc<dyn QueueRepository>,
    tx_queue_repo: Arc<dyn TransactionalQueueRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl WaitlistService {
    pub fn new(
        queue_repo: Arc<dyn QueueRepository>,
        tx_queue_repo: Arc<dyn TransactionalQueueRepository>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            queue_repo,
            tx_queue_repo,
            time_provider,
        }
    }

    /// Waiting count and wait estimate for a venue
    pub async fn queue_overview(&self, venue_id: &str) -> Result<QueueOverview> {
        overview::execute(self.queue_repo.as_ref(), venue_id).await
    }

    /// Caller's position and people ahead of them
    pub async fn queue_status(&self, user_id: &str, venue_id: &str) -> Result<QueueStanding> {
        status::execute(self.tx_queue_repo.as_ref(), user_id, venue_id).await
    }

    /// Join the queue, returning the assigned position
    pub async fn join_queue(&self, user_id: &str, venue_id: &str) -> Result<i64> {
        join::execute(
            self.queue_repo.as_ref(),
            self.time_provider.as_ref(),
            user_id,
            venue_id,
        )
        .await
    }

    /// Leave the queue
    pub async fn leave_queue(&self, user_id: &str, venue_id: &str) -> Result<()> {
        leave::execute(
            self.queue_repo.as_ref(),
            self.time_provider.as_ref(),
            user_id,
            venue_id,
        )
        .await
    }
}
