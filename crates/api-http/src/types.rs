//! HTTP Request/Response Types

use serde::{Deserialize, Serialize};

pub use waitlist_core::application::{QueueOverview, QueueStanding};
pub use waitlist_core::domain::{MenuItem, Venue};

/// Identifier accepted as a JSON string or integer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdParam {
    Text(String),
    Integer(i64),
}

impl IdParam {
    pub fn into_string(self) -> String {
        match self {
            IdParam::Text(s) => s,
            IdParam::Integer(n) => n.to_string(),
        }
    }
}

/// POST /join_queue and POST /leave_queue body
#[derive(Debug, Deserialize)]
pub struct QueueRequest {
    pub user_id: IdParam,
    pub venue_id: IdParam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinQueueResponse {
    pub message: String,
    pub position: i64,
}

/// Plain `{"message": ...}` body, used for confirmations and errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
