// Waitlist Infrastructure - SQLite Adapter
// Implements: VenueRepository, QueueRepository, TransactionalQueueRepository

mod connection;
mod error;
mod migration;
mod queue_repository;
mod transaction;
mod venue_repository;

pub use connection::{create_pool, create_pool_with, PoolConfig};
pub use migration::run_migrations;
pub use queue_repository::SqliteQueueRepository;
pub use transaction::SqliteQueueTransaction;
pub use venue_repository::SqliteVenueRepository;

// Note: sqlx::Error conversion is handled by a helper in `error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
