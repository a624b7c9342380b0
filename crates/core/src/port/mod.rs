// Port Layer - Interfaces for external dependencies

pub mod queue_repository;
pub mod time_provider;
pub mod transaction;
pub mod venue_repository;

// Re-exports
pub use queue_repository::QueueRepository;
pub use time_provider::TimeProvider;
pub use transaction::{QueueRepositoryTransaction, Transaction, TransactionalQueueRepository};
pub use venue_repository::VenueRepository;

#[cfg(test)]
pub use queue_repository::MockQueueRepository;
#[cfg(test)]
pub use venue_repository::MockVenueRepository;
