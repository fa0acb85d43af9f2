//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRecordRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL record storage and retrieval.
///
/// Uniqueness of `url` and `shortcode` is enforced by the constraints in
/// `migrations/0001_initial_schema.sql`; constraint violations surface as
/// [`AppError::DuplicateUrl`] / [`AppError::DuplicateShortcode`] through the
/// sqlx error conversion in [`crate::error`].
pub struct PgUrlRecordRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRecordRepository for PgUrlRecordRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO url_records (url, shortcode)
            VALUES ($1, $2)
            RETURNING id, url, shortcode, active, created_at, updated_at
            "#,
        )
        .bind(&new_record.url)
        .bind(&new_record.shortcode)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, url, shortcode, active, created_at, updated_at
            FROM url_records
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, url, shortcode, active, created_at, updated_at
            FROM url_records
            WHERE shortcode = $1 AND active
            "#,
        )
        .bind(shortcode)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_shortcode_any_status(
        &self,
        shortcode: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, url, shortcode, active, created_at, updated_at
            FROM url_records
            WHERE shortcode = $1
            "#,
        )
        .bind(shortcode)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn list_recent(&self, limit: Option<i64>) -> Result<Vec<UrlRecord>, AppError> {
        // LIMIT NULL means no limit in PostgreSQL.
        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, url, shortcode, active, created_at, updated_at
            FROM url_records
            WHERE active
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn update_shortcode(&self, id: i64, new_shortcode: &str) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            UPDATE url_records
            SET shortcode = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, url, shortcode, active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(new_shortcode)
        .fetch_optional(self.pool.as_ref())
        .await?;

        record.ok_or_else(|| AppError::not_found("url record not found"))
    }

    async fn deactivate(&self, shortcode: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE url_records
            SET active = FALSE, updated_at = now()
            WHERE shortcode = $1 AND active
            "#,
        )
        .bind(shortcode)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
