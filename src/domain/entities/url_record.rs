//! URL record entity: the sole persisted mapping entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored long URL together with its globally unique shortcode.
///
/// The shortcode is assigned at creation time and mutates only through
/// explicit regeneration. Records are never hard-deleted; `active` is a
/// visibility flag and an inactive record still occupies its place in the
/// shortcode uniqueness namespace.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub url: String,
    pub shortcode: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        url: String,
        shortcode: String,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url,
            shortcode,
            active,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the record has been deactivated (soft-deleted).
    pub fn is_deactivated(&self) -> bool {
        !self.active
    }
}

/// Input data for creating a new URL record.
///
/// The shortcode must already have been allocated; the store assigns `id`
/// and both timestamps.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub url: String,
    pub shortcode: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "https://example.com/a".to_string(),
            "Ab3xZ".to_string(),
            true,
            now,
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.url, "https://example.com/a");
        assert_eq!(record.shortcode, "Ab3xZ");
        assert!(record.active);
        assert!(!record.is_deactivated());
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_url_record_deactivated() {
        let now = Utc::now();
        let record = UrlRecord::new(
            7,
            "https://example.com/b".to_string(),
            "q1w2e".to_string(),
            false,
            now,
            now,
        );

        assert!(record.is_deactivated());
    }

    #[test]
    fn test_new_url_record_creation() {
        let new_record = NewUrlRecord {
            url: "https://rust-lang.org/com".to_string(),
            shortcode: "xyz78".to_string(),
        };

        assert_eq!(new_record.url, "https://rust-lang.org/com");
        assert_eq!(new_record.shortcode, "xyz78");
    }
}
