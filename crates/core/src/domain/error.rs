// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User {user_id} is not waiting at venue {venue_id}")]
    NotInQueue { user_id: String, venue_id: String },

    #[error("Invalid queue status: {0}")]
    InvalidStatus(String),
}
