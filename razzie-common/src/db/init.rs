//! Database initialization
//!
//! The store is either a file-backed SQLite database or a private
//! in-memory one. Both get the same schema, created idempotently.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Open the configured store: file-backed when a path is given, in-memory otherwise
pub async fn open_database(db_path: Option<&Path>) -> Result<SqlitePool> {
    match db_path {
        Some(path) => init_database(path).await,
        None => init_in_memory().await,
    }
}

/// Initialize a file-backed database and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // WAL lets request handlers read while a reload writes
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_movies_table(&pool).await?;

    Ok(pool)
}

/// Initialize an in-memory database
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn init_in_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await?;

    info!("Initialized in-memory database");

    create_movies_table(&pool).await?;

    Ok(pool)
}

/// Create the movies table
///
/// One row per (movie, producer) pair; `movie_id` groups the rows of one
/// CSV movie back together.
pub async fn create_movies_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            movie_id INTEGER NOT NULL,
            year INTEGER,
            title TEXT,
            studios TEXT,
            producers TEXT,
            winner INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_movies_winner_producers ON movies(winner, producers)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_movies_movie_id ON movies(movie_id)")
        .execute(pool)
        .await?;

    Ok(())
}
