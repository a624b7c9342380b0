// Queue Domain Model

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque caller-supplied user identifier
pub type UserId = String;

/// Opaque caller-supplied venue identifier
pub type VenueId = String;

/// Store-assigned surrogate key of a queue entry
pub type QueueEntryId = i64;

/// Fixed service time per waiting party, in minutes
pub const MINUTES_PER_PARTY: i64 = 2;

/// Wait estimate for a cohort of `parties` waiting entries
pub fn estimated_wait_minutes(parties: i64) -> i64 {
    parties * MINUTES_PER_PARTY
}

/// Queue entry status. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueStatus {
    Waiting,
    Done,
}

impl QueueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Waiting => "waiting",
            QueueStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(QueueStatus::Waiting),
            "done" => Ok(QueueStatus::Done),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// One row per (user, venue, queue attempt)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: QueueEntryId,
    pub user_id: UserId,
    pub venue_id: VenueId,
    /// Assigned at join time; never renumbered after departures
    pub position: i64,
    pub status: QueueStatus,

    pub joined_at: i64, // epoch ms
    pub left_at: Option<i64>,
}

impl QueueEntry {
    pub fn is_waiting(&self) -> bool {
        self.status == QueueStatus::Waiting
    }
}
