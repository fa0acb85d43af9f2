//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing URL records.
///
/// The store, not this interface, is the authority on uniqueness: `create`
/// and `update_shortcode` must fail atomically on a colliding shortcode or
/// URL even when an application-level check observed none, because
/// concurrent writers can race past any check-then-act sequence.
///
/// # Query scope
///
/// Lookup methods default to active records only. The `_any_status`
/// variant exists for uniqueness probes, which must see inactive records
/// too: deactivation does not vacate a shortcode.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRecordRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRecordRepository: Send + Sync {
    /// Creates a new URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateShortcode`] if the shortcode collides
    /// with any existing record, active or not.
    /// Returns [`AppError::DuplicateUrl`] if the URL is already stored.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its exact (normalized) URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds an active record by its shortcode.
    ///
    /// Deactivated records are not returned; to a resolver they are
    /// indistinguishable from codes that never existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by shortcode regardless of `active`.
    ///
    /// Used by the allocator to probe the full uniqueness namespace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_shortcode_any_status(
        &self,
        shortcode: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Lists active records, most recently created first.
    ///
    /// `limit` bounds the result; `None` returns all active records. Used
    /// by the bulk regeneration job.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: Option<i64>) -> Result<Vec<UrlRecord>, AppError>;

    /// Replaces a record's shortcode and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateShortcode`] if `new_shortcode` collides
    /// with another record.
    /// Returns [`AppError::NotFound`] if no record has the given id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_shortcode(&self, id: i64, new_shortcode: &str) -> Result<UrlRecord, AppError>;

    /// Deactivates a record (soft delete).
    ///
    /// Returns `Ok(true)` if an active record was deactivated, `Ok(false)`
    /// if no active record matched. The shortcode stays reserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn deactivate(&self, shortcode: &str) -> Result<bool, AppError>;
}
