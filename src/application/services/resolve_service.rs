//! Shortcode resolution service.

use std::sync::Arc;

use crate::domain::repositories::{ClickRepository, UrlRecordRepository};
use crate::error::AppError;

/// Service resolving shortcodes back to their stored URLs.
///
/// Every successful resolution increments the owning record's click counter
/// exactly once, through an atomic store-level upsert.
pub struct ResolveService<U: UrlRecordRepository, C: ClickRepository> {
    url_repository: Arc<U>,
    click_repository: Arc<C>,
}

impl<U: UrlRecordRepository, C: ClickRepository> ResolveService<U, C> {
    /// Creates a new resolution service.
    pub fn new(url_repository: Arc<U>, click_repository: Arc<C>) -> Self {
        Self {
            url_repository,
            click_repository,
        }
    }

    /// Resolves `shortcode` to the stored URL, counting the resolution.
    ///
    /// The returned string is suitable as the target of an HTTP redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown and deactivated
    /// shortcodes alike, so that the existence of a deactivated link is
    /// not observable. Store failures propagate as
    /// [`AppError::Internal`] and are never folded into `NotFound`.
    pub async fn resolve(&self, shortcode: &str) -> Result<String, AppError> {
        let record = self
            .url_repository
            .find_by_shortcode(shortcode)
            .await?
            .ok_or_else(|| AppError::not_found("shortcode not found"))?;

        let count = self.click_repository.increment(record.id).await?;
        tracing::debug!(shortcode = %record.shortcode, clicks = count, "resolved short link");

        Ok(record.url)
    }
}
