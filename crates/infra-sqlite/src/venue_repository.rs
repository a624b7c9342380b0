// SQLite VenueRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use sqlx::SqlitePool;
use waitlist_core::domain::{MenuItem, Venue};
use waitlist_core::error::Result;
use waitlist_core::port::VenueRepository;

pub struct SqliteVenueRepository {
    pool: SqlitePool,
}

impl SqliteVenueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for SqliteVenueRepository {
    async fn list_venues(&self) -> Result<Vec<Venue>> {
        let rows: Vec<VenueRow> =
            sqlx::query_as("SELECT id, name, location, image_url FROM venues ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(VenueRow::into_venue).collect())
    }

    async fn list_menu_items(&self, venue_id: &str) -> Result<Vec<MenuItem>> {
        // venue_id is bound as text; INTEGER affinity on the column coerces numeric strings
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, image_url, category
            FROM menu_items
            WHERE venue_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(venue_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(MenuItemRow::into_menu_item).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct VenueRow {
    id: i64,
    name: String,
    location: Option<String>,
    image_url: Option<String>,
}

impl VenueRow {
    fn into_venue(self) -> Venue {
        Venue {
            id: self.id,
            name: self.name,
            location: self.location,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    id: i64,
    name: String,
    price: f64,
    image_url: Option<String>,
    category: Option<String>,
}

impl MenuItemRow {
    fn into_menu_item(self) -> MenuItem {
        MenuItem {
            id: self.id,
            name: self.name,
            price: self.price,
            image_url: self.image_url,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};

    async fn setup_test_db() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        sqlx::query("INSERT INTO venues (id, name, location) VALUES (1, 'Shawarma House', 'Jeddah'), (2, 'Kunafa Corner', NULL)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            r#"
            INSERT INTO menu_items (venue_id, name, price, image_url, category) VALUES
                (1, 'Chicken Shawarma', 12.5, 'https://img/1.png', 'mains'),
                (1, 'Mint Lemonade', 8.0, NULL, 'drinks')
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_list_venues_in_storage_order() {
        let repo = SqliteVenueRepository::new(setup_test_db().await);

        let venues = repo.list_venues().await.unwrap();
        assert_eq!(venues.len(), 2);
        assert_eq!(venues[0].name, "Shawarma House");
        assert_eq!(venues[0].location.as_deref(), Some("Jeddah"));
        assert_eq!(venues[1].location, None);
    }

    #[tokio::test]
    async fn test_menu_items_for_venue() {
        let repo = SqliteVenueRepository::new(setup_test_db().await);

        let items = repo.list_menu_items("1").await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Chicken Shawarma");
        assert_eq!(items[0].price, 12.5);
        assert_eq!(items[1].category.as_deref(), Some("drinks"));
    }

    #[tokio::test]
    async fn test_venue_without_menu_is_empty() {
        let repo = SqliteVenueRepository::new(setup_test_db().await);

        assert!(repo.list_menu_items("2").await.unwrap().is_empty());
        assert!(repo.list_menu_items("no-such-venue").await.unwrap().is_empty());
    }
}
