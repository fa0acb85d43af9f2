//! Error taxonomy shared across the core.
//!
//! Callers are expected to match on the variant: validation and policy
//! failures are terminal and user-correctable, duplicate-key conflicts are
//! recovered locally by the shortening and regeneration services, and
//! infrastructure failures propagate as [`AppError::Internal`] without being
//! masked as `NotFound` or a duplicate.

use serde_json::{Value, json};

/// Application-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input failed URL-syntax validation. Never retried.
    #[error("invalid URL: {message}")]
    InvalidUrl { message: String },

    /// Input failed a domain policy validator. Never retried.
    #[error("URL rejected by policy `{policy}`: {message}")]
    PolicyRejected { policy: String, message: String },

    /// A caller-supplied argument was out of range.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Store-level uniqueness violation on `shortcode`.
    ///
    /// Recovered by bounded retry with a fresh candidate; surfaced only
    /// once retries are exhausted (as [`AppError::AllocationExhausted`]).
    #[error("shortcode collides with an existing record")]
    DuplicateShortcode,

    /// Store-level uniqueness violation on `url`.
    ///
    /// Raised when two concurrent creators race on the same new URL; the
    /// loser converts this into a fresh lookup rather than an error.
    #[error("URL collides with an existing record")]
    DuplicateUrl,

    /// No collision-free shortcode could be reserved within the attempt
    /// budget.
    #[error("could not allocate a unique shortcode after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// Lookup miss. Deliberately identical for never-existed and
    /// deactivated shortcodes so that deactivation is not observable.
    #[error("{message}")]
    NotFound { message: String },

    /// Store connectivity or transaction failure. Not recoverable here.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

/// Classifies sqlx errors into the taxonomy above.
///
/// Unique violations are told apart by constraint name, matching the names
/// assigned in `migrations/0001_initial_schema.sql`. Anything else is an
/// infrastructure failure.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error()
            && db_err.is_unique_violation()
        {
            return match db_err.constraint() {
                Some("url_records_shortcode_key") => AppError::DuplicateShortcode,
                Some("url_records_url_key") => AppError::DuplicateUrl,
                other => AppError::internal(
                    "unexpected unique constraint violation",
                    json!({ "constraint": other }),
                ),
            };
        }

        AppError::internal("database error", json!({ "source": e.to_string() }))
    }
}
