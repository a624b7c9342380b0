// Venue & Menu Domain Model (read-only catalog)

use serde::{Deserialize, Serialize};

/// Restaurant / location entity, returned as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

/// Menu item belonging to a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
}
