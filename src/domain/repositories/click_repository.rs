//! Repository trait for resolution counters.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for per-record click counting.
///
/// The increment must be a single atomic store operation (upsert or
/// conditional update), never read-add-write in application code:
/// concurrent resolutions of a popular shortcode would otherwise lose
/// increments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Atomically increments the counter for a URL record, creating it on
    /// first use, and returns the new count.
    ///
    /// The lazily created row is seeded at 1 in the same statement, so the
    /// first resolution observes a count of exactly 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// missing owning record.
    async fn increment(&self, url_record_id: i64) -> Result<i64, AppError>;

    /// Returns the current count for a URL record, 0 when no counter row
    /// exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_for(&self, url_record_id: i64) -> Result<i64, AppError>;
}
