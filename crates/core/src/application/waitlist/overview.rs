// Queue Overview Use Case

use super::validate::require_id;
use crate::domain::estimated_wait_minutes;
use crate::error::Result;
use crate::port::QueueRepository;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueOverview {
    pub venue_id: String,
    pub waiting_count: i64,
    pub estimated_wait_minutes: i64,
}

pub async fn execute(queue_repo: &dyn QueueRepository, venue_id: &str) -> Result<QueueOverview> {
    require_id("venue_id", venue_id)?;

    let waiting_count = queue_repo.count_waiting(venue_id).await?;

    Ok(QueueOverview {
        venue_id: venue_id.to_string(),
        waiting_count,
        estimated_wait_minutes: estimated_wait_minutes(waiting_count),
    })
}
