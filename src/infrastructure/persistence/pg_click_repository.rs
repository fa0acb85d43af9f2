//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for resolution counters.
///
/// The increment is a single upsert so concurrent resolutions of the same
/// shortcode serialize on the row instead of losing updates.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn increment(&self, url_record_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO click_records (url_record_id, count)
            VALUES ($1, 1)
            ON CONFLICT ON CONSTRAINT click_records_url_record_id_key
            DO UPDATE SET count = click_records.count + 1, updated_at = now()
            RETURNING count
            "#,
        )
        .bind(url_record_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_for(&self, url_record_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT count
            FROM click_records
            WHERE url_record_id = $1
            "#,
        )
        .bind(url_record_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(count.unwrap_or(0))
    }
}
