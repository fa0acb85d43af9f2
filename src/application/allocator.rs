//! Shortcode allocation against the live record set.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::repositories::UrlRecordRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Allocates candidate shortcodes that are collision-free against the store
/// at probe time.
///
/// Each attempt generates a candidate and probes the full record set,
/// inactive rows included. The probe is inherently check-then-act: a
/// concurrent writer can still claim the candidate between probe and
/// insert, so callers must treat the store's uniqueness constraint as
/// ground truth and re-allocate on [`AppError::DuplicateShortcode`].
pub struct ShortcodeAllocator<R: UrlRecordRepository> {
    repository: Arc<R>,
    code_length: usize,
    alphabet: String,
    max_attempts: u32,
}

impl<R: UrlRecordRepository> ShortcodeAllocator<R> {
    /// Creates an allocator with the generation parameters from `config`.
    pub fn new(repository: Arc<R>, config: &Config) -> Self {
        Self {
            repository,
            code_length: config.code_length,
            alphabet: config.alphabet.clone(),
            max_attempts: config.alloc_max_attempts,
        }
    }

    /// Generates and reserves-by-probe a shortcode not currently in use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AllocationExhausted`] when every candidate in
    /// the attempt budget was already taken, and [`AppError::Internal`] on
    /// store failures.
    pub async fn allocate(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let candidate = generate_code(self.code_length, &self.alphabet)?;

            if self
                .repository
                .find_by_shortcode_any_status(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }

            tracing::debug!(candidate = %candidate, attempt, "shortcode candidate already taken");
        }

        tracing::warn!(
            attempts = self.max_attempts,
            code_length = self.code_length,
            "shortcode allocation exhausted; namespace may be saturated"
        );
        Err(AppError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl<R: UrlRecordRepository> Clone for ShortcodeAllocator<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            code_length: self.code_length,
            alphabet: self.alphabet.clone(),
            max_attempts: self.max_attempts,
        }
    }
}
