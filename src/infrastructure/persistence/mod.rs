//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx, plus
//! connection pool and migration helpers for embedding applications.
//!
//! # Repositories
//!
//! - [`PgUrlRecordRepository`] - URL record storage with store-enforced uniqueness
//! - [`PgClickRepository`] - Atomic resolution counters

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

pub mod pg_click_repository;
pub mod pg_url_record_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_url_record_repository::PgUrlRecordRepository;

/// Opens a connection pool using the pool settings in `config`.
///
/// # Errors
///
/// Returns an error when the database is unreachable within the configured
/// acquire timeout.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    Ok(pool)
}

/// Applies the migrations bundled under `migrations/`.
///
/// # Errors
///
/// Returns an error when a migration fails or was tampered with.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run database migrations")?;

    Ok(())
}
