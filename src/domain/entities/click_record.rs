//! Click record entity: per-record resolution counter.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The resolution counter owned by exactly one [`super::UrlRecord`].
///
/// Created lazily on the first successful resolution of the owning record's
/// shortcode and incremented by one on every subsequent resolution. The
/// count never decreases.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ClickRecord {
    pub id: i64,
    pub url_record_id: i64,
    pub count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClickRecord {
    /// Creates a new ClickRecord instance.
    pub fn new(
        id: i64,
        url_record_id: i64,
        count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url_record_id,
            count,
            created_at,
            updated_at,
        }
    }
}
