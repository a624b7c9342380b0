// Application Layer - Use Cases and Business Logic

pub mod catalog;
pub mod waitlist;

// Re-exports
pub use catalog::CatalogService;
pub use waitlist::{QueueOverview, QueueStanding, WaitlistService};
