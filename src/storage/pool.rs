//! Database connection pool management.
//!
//! The store runs over a single SQLite connection:
//! - WAL mode enabled
//! - Automatic database file creation
//! - One connection, so every statement is serialized by the pool

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use log::{error, info};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Initializes and returns a single-connection pool for the SQLite file at `db_path`.
///
/// Creates the database file if it doesn't exist and enables WAL mode.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    let db_path_str = db_path.to_string_lossy().to_string();
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(&db_path_str)
    {
        Ok(_) => info!("Database file created successfully: {db_path_str}"),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("Database file already exists: {db_path_str}")
        }
        Err(e) => {
            error!("Failed to create database file: {e}");
            return Err(DatabaseError::FileCreationError(e.to_string()));
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&format!("sqlite:{}", db_path_str))
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    // Enable WAL mode
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await
        .map_err(|e| {
            error!("Failed to set WAL mode: {e}");
            DatabaseError::SqlError(e)
        })?;

    Ok(pool)
}

/// Returns a single-connection pool over a private in-memory database.
///
/// The connection is never recycled; closing it would drop the database.
pub async fn init_memory_pool() -> Result<SqlitePool, DatabaseError> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .map_err(DatabaseError::SqlError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_db_pool_creates_file_and_enables_wal() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("pool.sqlite");

        let pool = init_db_pool_with_path(&path).await.expect("pool");
        assert!(path.exists());

        let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .expect("journal_mode");
        assert_eq!(mode.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_init_db_pool_missing_directory_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("pool.sqlite");

        let result = init_db_pool_with_path(&path).await;
        assert!(matches!(result, Err(DatabaseError::FileCreationError(_))));
    }

    #[tokio::test]
    async fn test_memory_pool_keeps_state_between_statements() {
        let pool = init_memory_pool().await.expect("pool");
        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(&pool)
            .await
            .expect("create");
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM t")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(count, 0);
    }
}
