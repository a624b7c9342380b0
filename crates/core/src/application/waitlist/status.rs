// Queue Status Use Case

use super::validate::require_id;
use crate::domain::{estimated_wait_minutes, DomainError};
use crate::error::Result;
use crate::port::TransactionalQueueRepository;
use serde::Serialize;

/// Where a waiting user stands in the queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueStanding {
    pub position: i64,
    pub people_ahead: i64,
    pub estimated_wait_minutes: i64,
}

/// Execute status use case
///
/// The own-position lookup and the people-ahead count run in one
/// transaction so both observe the same snapshot of the queue.
pub async fn execute(
    tx_repo: &dyn TransactionalQueueRepository,
    user_id: &str,
    venue_id: &str,
) -> Result<QueueStanding> {
    require_id("user_id", user_id)?;
    require_id("venue_id", venue_id)?;

    let mut tx = tx_repo.begin_transaction().await?;

    let entry = match tx.find_waiting_entry(user_id, venue_id).await? {
        Some(entry) if entry.is_waiting() => entry,
        _ => {
            tx.rollback().await?;
            return Err(DomainError::NotInQueue {
                user_id: user_id.to_string(),
                venue_id: venue_id.to_string(),
            }
            .into());
        }
    };

    // Positions are never renumbered, so rank is a count, not a subtraction
    let people_ahead = tx.count_waiting_ahead(venue_id, entry.position).await?;

    tx.commit().await?;

    Ok(QueueStanding {
        position: entry.position,
        people_ahead,
        estimated_wait_minutes: estimated_wait_minutes(people_ahead),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{QueueEntry, QueueStatus};
    use crate::port::{QueueRepositoryTransaction, Transaction};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct ScriptedTx {
        entry: Option<QueueEntry>,
        ahead: i64,
        committed: Arc<AtomicBool>,
    }

    #[async_trait]
    impl Transaction for ScriptedTx {
        async fn commit(self: Box<Self>) -> Result<()> {
            self.committed.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<()> {
            Ok(())
        }
    }

    #[async_trait]
    impl QueueRepositoryTransaction for ScriptedTx {
        async fn find_waiting_entry(
            &mut self,
            _user_id: &str,
            _venue_id: &str,
        ) -> Result<Option<QueueEntry>> {
            Ok(self.entry.clone())
        }

        async fn count_waiting_ahead(&mut self, _venue_id: &str, _position: i64) -> Result<i64> {
            Ok(self.ahead)
        }
    }

    struct ScriptedRepo {
        entry: Option<QueueEntry>,
        ahead: i64,
        committed: Arc<AtomicBool>,
    }

    #[async_trait]
    impl TransactionalQueueRepository for ScriptedRepo {
        async fn begin_transaction(&self) -> Result<Box<dyn QueueRepositoryTransaction>> {
            Ok(Box::new(ScriptedTx {
                entry: self.entry.clone(),
                ahead: self.ahead,
                committed: Arc::clone(&self.committed),
            }))
        }
    }

    fn waiting_at(position: i64) -> QueueEntry {
        QueueEntry {
            id: 1,
            user_id: "u9".to_string(),
            venue_id: "v1".to_string(),
            position,
            status: QueueStatus::Waiting,
            joined_at: 0,
            left_at: None,
        }
    }

    #[tokio::test]
    async fn test_standing_counts_people_ahead() {
        let committed = Arc::new(AtomicBool::new(false));
        let repo = ScriptedRepo {
            entry: Some(waiting_at(9)),
            ahead: 3,
            committed: Arc::clone(&committed),
        };

        let standing = execute(&repo, "u9", "v1").await.unwrap();
        assert_eq!(
            standing,
            QueueStanding {
                position: 9,
                people_ahead: 3,
                estimated_wait_minutes: 6,
            }
        );
        assert!(committed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_absent_user_is_not_in_queue() {
        let committed = Arc::new(AtomicBool::new(false));
        let repo = ScriptedRepo {
            entry: None,
            ahead: 0,
            committed: Arc::clone(&committed),
        };

        let err = execute(&repo, "ghost", "v1").await.unwrap_err();
        assert!(err.is_not_in_queue());
        assert!(!committed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_finished_entry_is_not_in_queue() {
        let mut entry = waiting_at(2);
        entry.status = QueueStatus::Done;
        entry.left_at = Some(5);
        let repo = ScriptedRepo {
            entry: Some(entry),
            ahead: 1,
            committed: Arc::new(AtomicBool::new(false)),
        };

        let err = execute(&repo, "u9", "v1").await.unwrap_err();
        assert!(err.is_not_in_queue());
    }
}
