// SQLite Connection Pool Setup

use crate::error::map_sqlx_error;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use waitlist_core::error::{AppError, Result};

/// Pool sizing and lock-wait settings
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Create SQLite connection pool with default settings
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    create_pool_with(database_url, &PoolConfig::default()).await
}

/// Create SQLite connection pool with WAL mode and optimizations
///
/// For file-backed databases the parent directory is created first, since
/// SQLite creates a missing file but not a missing directory.
pub async fn create_pool_with(database_url: &str, config: &PoolConfig) -> Result<SqlitePool> {
    ensure_parent_dir(database_url)?;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Config(format!("Invalid database URL {}: {}", database_url, e)))?
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)?;

    Ok(pool)
}

/// Filesystem path behind a database URL, `None` for in-memory databases
fn database_file_path(database_url: &str) -> Option<PathBuf> {
    if database_url.contains(":memory:") || database_url.contains("mode=memory") {
        return None;
    }

    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);

    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn ensure_parent_dir(database_url: &str) -> Result<()> {
    let Some(path) = database_file_path(database_url) else {
        return Ok(());
    };

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!(
                    "Cannot create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        assert!(pool.acquire().await.is_ok());
    }

    #[tokio::test]
    async fn test_pool_respects_max_connections() {
        let config = PoolConfig {
            max_connections: 2,
            ..Default::default()
        };
        let pool = create_pool_with("sqlite::memory:", &config).await.unwrap();
        assert_eq!(pool.options().get_max_connections(), 2);
    }

    #[test]
    fn test_database_file_path() {
        assert_eq!(database_file_path("sqlite::memory:"), None);
        assert_eq!(
            database_file_path("/var/lib/waitlist/waitlist.db"),
            Some(PathBuf::from("/var/lib/waitlist/waitlist.db"))
        );
        assert_eq!(
            database_file_path("sqlite:///tmp/w.db?mode=rwc"),
            Some(PathBuf::from("/tmp/w.db"))
        );
        assert_eq!(
            database_file_path("sqlite:data/w.db"),
            Some(PathBuf::from("data/w.db"))
        );
    }

    #[tokio::test]
    async fn test_create_pool_creates_missing_directory() {
        let dir = std::env::temp_dir().join(format!("waitlist_fresh_dir_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let db_path = dir.join("nested").join("waitlist.db");

        let pool = create_pool(&db_path.to_string_lossy()).await.unwrap();
        assert!(pool.acquire().await.is_ok());
        assert!(db_path.exists());

        pool.close().await;
        let _ = std::fs::remove_dir_all(&dir);
    }
}
