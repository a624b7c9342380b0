// Domain Layer - Pure business logic and entities

pub mod error;
pub mod queue;
pub mod venue;

// Re-exports
pub use error::DomainError;
pub use queue::{
    estimated_wait_minutes, QueueEntry, QueueEntryId, QueueStatus, UserId, VenueId,
    MINUTES_PER_PARTY,
};
pub use venue::{MenuItem, Venue};
