//! Shared fixtures for the end-to-end tests

use sqlx::SqlitePool;
use std::sync::Arc;
use waitlist_api_http::AppState;
use waitlist_core::application::{CatalogService, WaitlistService};
use waitlist_core::port::time_provider::SystemTimeProvider;
use waitlist_infra_sqlite::{
    create_pool, run_migrations, SqliteQueueRepository, SqliteVenueRepository,
};

/// Fully wired services over a fresh in-memory database
pub struct TestContext {
    pub pool: SqlitePool,
    pub catalog: Arc<CatalogService>,
    pub waitlist: Arc<WaitlistService>,
}

impl TestContext {
    pub async fn new() -> Self {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        let queue_repo = Arc::new(SqliteQueueRepository::new(pool.clone()));
        let catalog = Arc::new(CatalogService::new(Arc::new(SqliteVenueRepository::new(
            pool.clone(),
        ))));
        let waitlist = Arc::new(WaitlistService::new(
            queue_repo.clone(),
            queue_repo,
            Arc::new(SystemTimeProvider),
        ));

        Self {
            pool,
            catalog,
            waitlist,
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.catalog.clone(), self.waitlist.clone())
    }

    /// Two venues; only the first has a menu
    pub async fn seed_catalog(&self) {
        sqlx::query(
            "INSERT INTO venues (id, name, location, image_url) VALUES \
             (1, 'Shawarma House', 'Jeddah', 'https://img/venue1.png'), \
             (2, 'Kunafa Corner', 'Riyadh', NULL)",
        )
        .execute(&self.pool)
        .await
        .unwrap();

        sqlx::query(
            "INSERT INTO menu_items (venue_id, name, price, image_url, category) VALUES \
             (1, 'Chicken Shawarma', 12.5, 'https://img/item1.png', 'mains'), \
             (1, 'Mint Lemonade', 8.0, NULL, 'drinks')",
        )
        .execute(&self.pool)
        .await
        .unwrap();
    }

    /// Count queue rows for a pair regardless of status
    pub async fn entry_count(&self, user_id: &str, venue_id: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM queues WHERE user_id = ? AND venue_id = ?")
            .bind(user_id)
            .bind(venue_id)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}
