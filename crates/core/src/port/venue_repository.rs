// Venue Repository Port (Interface)

use crate::domain::{MenuItem, Venue};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only access to venues and their menus
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// All venues, in storage order
    async fn list_venues(&self) -> Result<Vec<Venue>>;

    /// Menu items of one venue, in storage order (empty if none)
    async fn list_menu_items(&self, venue_id: &str) -> Result<Vec<MenuItem>>;
}
