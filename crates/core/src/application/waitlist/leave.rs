// Leave Queue Use Case

use super::validate::require_id;
use crate::domain::DomainError;
use crate::error::Result;
use crate::port::{QueueRepository, TimeProvider};

/// Confirmation returned to the caller after leaving
pub const LEFT_MESSAGE: &str = "You have left the queue";

/// Execute leave use case (single conditional update)
///
/// Zero affected rows means the user never joined or already left.
pub async fn execute(
    queue_repo: &dyn QueueRepository,
    time_provider: &dyn TimeProvider,
    user_id: &str,
    venue_id: &str,
) -> Result<()> {
    require_id("user_id", user_id)?;
    require_id("venue_id", venue_id)?;

    let left_at = time_provider.now_millis();
    let affected = queue_repo.mark_done(user_id, venue_id, left_at).await?;

    if affected == 0 {
        return Err(DomainError::NotInQueue {
            user_id: user_id.to_string(),
            venue_id: venue_id.to_string(),
        }
        .into());
    }

    Ok(())
}
