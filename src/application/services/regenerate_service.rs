//! Bulk shortcode regeneration job.

use std::sync::Arc;

use serde::Serialize;

use crate::application::allocator::ShortcodeAllocator;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRecordRepository;
use crate::error::AppError;

/// Outcome of a regeneration run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegenerateSummary {
    /// Records whose shortcode was replaced.
    pub codes_changed: u64,
    /// Records left untouched after their retry failed.
    pub skipped: u64,
}

/// Administrative job re-assigning shortcodes for existing records.
///
/// Operates record by record so a partial run leaves every record either
/// fully updated or untouched; re-running the job is safe at any point.
pub struct RegenerateService<R: UrlRecordRepository> {
    repository: Arc<R>,
    allocator: ShortcodeAllocator<R>,
}

impl<R: UrlRecordRepository> RegenerateService<R> {
    /// Creates a new regeneration service.
    pub fn new(repository: Arc<R>, allocator: ShortcodeAllocator<R>) -> Self {
        Self {
            repository,
            allocator,
        }
    }

    /// Re-assigns fresh shortcodes to up to `limit` active records, most
    /// recently created first; all of them when `limit` is `None`.
    ///
    /// A record whose new shortcode collides at persistence time is retried
    /// once with a fresh candidate, then skipped and reported in the
    /// summary; a skipped record keeps its previous shortcode. Store
    /// failures abort the run and propagate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn regenerate(&self, limit: Option<i64>) -> Result<RegenerateSummary, AppError> {
        let records = self.repository.list_recent(limit).await?;
        tracing::info!(records = records.len(), ?limit, "starting shortcode regeneration");

        let mut summary = RegenerateSummary::default();

        for record in records {
            match self.regenerate_one(&record).await {
                Ok(new_code) => {
                    tracing::debug!(
                        id = record.id,
                        old = %record.shortcode,
                        new = %new_code,
                        "regenerated shortcode"
                    );
                    summary.codes_changed += 1;
                }
                Err(AppError::DuplicateShortcode | AppError::AllocationExhausted { .. }) => {
                    tracing::warn!(
                        id = record.id,
                        shortcode = %record.shortcode,
                        "skipping record after failed regeneration retry"
                    );
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            codes_changed = summary.codes_changed,
            skipped = summary.skipped,
            "shortcode regeneration finished"
        );
        Ok(summary)
    }

    /// Replaces one record's shortcode, retrying once on a residual
    /// duplicate.
    async fn regenerate_one(&self, record: &UrlRecord) -> Result<String, AppError> {
        let candidate = self.allocator.allocate().await?;

        match self.repository.update_shortcode(record.id, &candidate).await {
            Ok(updated) => Ok(updated.shortcode),
            Err(AppError::DuplicateShortcode) => {
                let retry = self.allocator.allocate().await?;
                let updated = self.repository.update_shortcode(record.id, &retry).await?;
                Ok(updated.shortcode)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::repositories::MockUrlRecordRepository;
    use chrono::Utc;

    fn test_record(id: i64, shortcode: &str) -> UrlRecord {
        let now = Utc::now();
        UrlRecord::new(
            id,
            format!("https://example.com/{id}"),
            shortcode.to_string(),
            true,
            now,
            now,
        )
    }

    fn service_with(
        mock_repo: MockUrlRecordRepository,
    ) -> RegenerateService<MockUrlRecordRepository> {
        let repo = Arc::new(mock_repo);
        let config = Config::with_defaults("postgres://localhost/test");
        let allocator = ShortcodeAllocator::new(Arc::clone(&repo), &config);
        RegenerateService::new(repo, allocator)
    }

    #[tokio::test]
    async fn test_regenerate_changes_every_selected_record() {
        let mut mock_repo = MockUrlRecordRepository::new();

        mock_repo
            .expect_list_recent()
            .withf(|limit| *limit == Some(2))
            .times(1)
            .returning(|_| Ok(vec![test_record(2, "bbbbb"), test_record(1, "aaaaa")]));
        mock_repo
            .expect_find_by_shortcode_any_status()
            .times(2)
            .returning(|_| Ok(None));
        mock_repo
            .expect_update_shortcode()
            .times(2)
            .returning(|id, code| Ok(test_record(id, code)));

        let service = service_with(mock_repo);
        let summary = service.regenerate(Some(2)).await.unwrap();

        assert_eq!(summary.codes_changed, 2);
        assert_eq!(summary.skipped, 0);
    }

    #[tokio::test]
    async fn test_regenerate_without_limit_lists_everything() {
        let mut mock_repo = MockUrlRecordRepository::new();

        mock_repo
            .expect_list_recent()
            .withf(|limit| limit.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = service_with(mock_repo);
        let summary = service.regenerate(None).await.unwrap();

        assert_eq!(summary.codes_changed, 0);
    }

    #[tokio::test]
    async fn test_regenerate_retries_residual_duplicate_once() {
        let mut mock_repo = MockUrlRecordRepository::new();

        mock_repo
            .expect_list_recent()
            .times(1)
            .returning(|_| Ok(vec![test_record(1, "aaaaa")]));
        mock_repo
            .expect_find_by_shortcode_any_status()
            .times(2)
            .returning(|_| Ok(None));

        let mut updates = 0;
        mock_repo
            .expect_update_shortcode()
            .times(2)
            .returning(move |id, code| {
                updates += 1;
                if updates == 1 {
                    Err(AppError::DuplicateShortcode)
                } else {
                    Ok(test_record(id, code))
                }
            });

        let service = service_with(mock_repo);
        let summary = service.regenerate(None).await.unwrap();

        assert_eq!(summary.codes_changed, 1);
        assert_eq!(summary.skipped, 0);
    }

    #[tokio::test]
    async fn test_regenerate_skips_record_after_second_duplicate() {
        let mut mock_repo = MockUrlRecordRepository::new();

        mock_repo
            .expect_list_recent()
            .times(1)
            .returning(|_| Ok(vec![test_record(1, "aaaaa"), test_record(2, "bbbbb")]));
        mock_repo
            .expect_find_by_shortcode_any_status()
            .returning(|_| Ok(None));

        let mut calls = 0;
        mock_repo
            .expect_update_shortcode()
            .returning(move |id, code| {
                calls += 1;
                // Record 1 collides on both tries; record 2 succeeds.
                if calls <= 2 {
                    Err(AppError::DuplicateShortcode)
                } else {
                    Ok(test_record(id, code))
                }
            });

        let service = service_with(mock_repo);
        let summary = service.regenerate(None).await.unwrap();

        assert_eq!(summary.codes_changed, 1);
        assert_eq!(summary.skipped, 1);
    }

    #[tokio::test]
    async fn test_regenerate_aborts_on_store_failure() {
        let mut mock_repo = MockUrlRecordRepository::new();

        mock_repo
            .expect_list_recent()
            .times(1)
            .returning(|_| Ok(vec![test_record(1, "aaaaa")]));
        mock_repo
            .expect_find_by_shortcode_any_status()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update_shortcode().times(1).returning(|_, _| {
            Err(AppError::internal(
                "database error",
                serde_json::json!({}),
            ))
        });

        let service = service_with(mock_repo);
        let result = service.regenerate(None).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
