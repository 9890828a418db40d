//! Database schema
//!
//! A single flat key-value table. Values are opaque strings; the preset
//! store owns their encoding. There is no versioning.

use crate::error::Result;
use sqlx::sqlite::SqlitePool;

/// Initialize database with schema
pub async fn initialize_database(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Initializing database schema");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database initialization complete");
    Ok(())
}
