// Catalog Service - read-through access to venues and menus

use crate::domain::{MenuItem, Venue};
use crate::error::Result;
use crate::port::VenueRepository;
use std::sync::Arc;

pub struct CatalogService {
    venue_repo: Arc<dyn VenueRepository>,
}

impl CatalogService {
    pub fn new(venue_repo: Arc<dyn VenueRepository>) -> Self {
        Self { venue_repo }
    }

    /// All venue records, verbatim
    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        self.venue_repo.list_venues().await
    }

    /// Menu of a venue. No existence check: an unknown venue yields an empty list.
    pub async fn list_menu_items(&self, venue_id: &str) -> Result<Vec<MenuItem>> {
        self.venue_repo.list_menu_items(venue_id).await
    }
}
