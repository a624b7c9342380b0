// Join Queue Use Case

use super::validate::require_id;
use crate::error::Result;
use crate::port::{QueueRepository, TimeProvider};
use tracing::debug;

/// Confirmation returned to the caller after joining
pub const JOINED_MESSAGE: &str = "You have joined the queue!";

/// Execute join use case
///
/// Position assignment (waiting count + 1) and the insert happen in one
/// store operation. Not idempotent: joining twice creates two entries.
pub async fn execute(
    queue_repo: &dyn QueueRepository,
    time_provider: &dyn TimeProvider,
    user_id: &str,
    venue_id: &str,
) -> Result<i64> {
    require_id("user_id", user_id)?;
    require_id("venue_id", venue_id)?;

    let joined_at = time_provider.now_millis();
    let position = queue_repo.enqueue(user_id, venue_id, joined_at).await?;

    debug!(user_id, venue_id, position, "User joined queue");
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::time_provider::FixedTimeProvider;
    use crate::port::MockQueueRepository;

    #[tokio::test]
    async fn test_join_passes_clock_to_store() {
        let mut repo = MockQueueRepository::new();
        repo.expect_enqueue()
            .withf(|user_id, venue_id, joined_at| {
                user_id.to_string() == "u1"
                    && venue_id.to_string() == "v1"
                    && *joined_at == 1_700_000_000_000
            })
            .times(1)
            .returning(|_, _, _| Ok(4));

        let position = execute(&repo, &FixedTimeProvider(1_700_000_000_000), "u1", "v1")
            .await
            .unwrap();
        assert_eq!(position, 4);
    }

    #[tokio::test]
    async fn test_join_requires_user_id() {
        let mut repo = MockQueueRepository::new();
        repo.expect_enqueue().times(0);

        let result = execute(&repo, &FixedTimeProvider(0), " ", "v1").await;
        assert!(result.unwrap_err().to_string().contains("user_id"));
    }
}
