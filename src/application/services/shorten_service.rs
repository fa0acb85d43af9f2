//! URL shortening service.

use std::sync::Arc;

use serde_json::json;

use crate::application::allocator::ShortcodeAllocator;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::policy::UrlPolicy;
use crate::domain::repositories::UrlRecordRepository;
use crate::error::AppError;
use crate::utils::url_validator::validate_url;

/// Creation attempts before giving up on a persistently colliding shortcode.
///
/// Each attempt allocates a fresh candidate; the store's uniqueness
/// constraint decides, not the allocator's probe.
const CREATE_MAX_ATTEMPTS: u32 = 3;

/// Service implementing get-or-create shortening of URLs.
///
/// Shortening is idempotent by normalized URL: submitting a URL that
/// already has a record returns that record unchanged. A shortcode is
/// allocated only on creation.
pub struct ShortenService<R: UrlRecordRepository> {
    repository: Arc<R>,
    allocator: ShortcodeAllocator<R>,
    policies: Vec<Arc<dyn UrlPolicy>>,
}

impl<R: UrlRecordRepository> ShortenService<R> {
    /// Creates a new shortening service.
    pub fn new(
        repository: Arc<R>,
        allocator: ShortcodeAllocator<R>,
        policies: Vec<Arc<dyn UrlPolicy>>,
    ) -> Self {
        Self {
            repository,
            allocator,
            policies,
        }
    }

    /// Gets or creates the record for `raw_url`.
    ///
    /// Returns the record and `true` when it was created by this call,
    /// `false` when an existing record was returned.
    ///
    /// # Concurrency
    ///
    /// Two concurrent calls for the same new URL may both observe "absent"
    /// and race on creation; the store's uniqueness constraint on `url`
    /// picks the winner and the loser returns the winner's record with
    /// `created = false`. A shortcode candidate raced away between probe
    /// and insert is retried with a fresh allocation, bounded by
    /// [`CREATE_MAX_ATTEMPTS`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] for syntactically invalid input,
    /// [`AppError::PolicyRejected`] when a policy validator refuses the
    /// URL, [`AppError::AllocationExhausted`] once creation retries are
    /// used up, and [`AppError::Internal`] on store failures.
    pub async fn shorten(&self, raw_url: &str) -> Result<(UrlRecord, bool), AppError> {
        let url = validate_url(raw_url).map_err(|e| AppError::invalid_url(e.to_string()))?;

        for policy in &self.policies {
            policy.check(&url).map_err(|reason| {
                tracing::debug!(policy = policy.name(), %url, "URL rejected by policy");
                AppError::PolicyRejected {
                    policy: policy.name().to_string(),
                    message: reason,
                }
            })?;
        }

        if let Some(existing) = self.repository.find_by_url(&url).await? {
            return Ok((existing, false));
        }

        for attempt in 1..=CREATE_MAX_ATTEMPTS {
            let shortcode = self.allocator.allocate().await?;

            match self
                .repository
                .create(NewUrlRecord {
                    url: url.clone(),
                    shortcode,
                })
                .await
            {
                Ok(record) => {
                    tracing::info!(
                        id = record.id,
                        shortcode = %record.shortcode,
                        "created short link"
                    );
                    return Ok((record, true));
                }
                Err(AppError::DuplicateShortcode) => {
                    tracing::warn!(attempt, "shortcode raced at insert; re-allocating");
                }
                Err(AppError::DuplicateUrl) => {
                    // A concurrent creator won the URL; return its record.
                    let record = self.repository.find_by_url(&url).await?.ok_or_else(|| {
                        AppError::internal(
                            "record missing after duplicate-url conflict",
                            json!({ "url": url }),
                        )
                    })?;
                    return Ok((record, false));
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::AllocationExhausted {
            attempts: CREATE_MAX_ATTEMPTS,
        })
    }
}
