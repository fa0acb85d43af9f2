//! Pluggable URL acceptance policies.
//!
//! Policies run after syntactic validation and before persistence. Each
//! policy is a named, swappable unit so that an individual rule can be
//! corrected or removed without touching the shortening flow.

use std::sync::Arc;

/// A named acceptance rule applied to a normalized URL.
///
/// Returning `Err(reason)` rejects the URL; the reason is surfaced verbatim
/// to the caller and never retried.
pub trait UrlPolicy: Send + Sync {
    /// Stable identifier of the policy, reported on rejection.
    fn name(&self) -> &'static str;

    /// Checks the URL, returning a human-readable reason on rejection.
    fn check(&self, url: &str) -> Result<(), String>;
}

/// Accepts only URLs containing the literal substring `com`.
///
/// Inherited as-is from the system this core replaces. The rule is crude:
/// it rejects valid URLs without the substring (`https://example.org/x`)
/// and accepts unrelated ones that happen to contain it
/// (`https://comedy.net`). Kept as a named policy precisely so it can be
/// swapped out.
pub struct ComSubstringPolicy;

impl UrlPolicy for ComSubstringPolicy {
    fn name(&self) -> &'static str {
        "com-substring"
    }

    fn check(&self, url: &str) -> Result<(), String> {
        if url.contains("com") {
            Ok(())
        } else {
            Err("URL does not contain `com`".to_string())
        }
    }
}

/// The policy list installed by default at composition time.
pub fn default_policies() -> Vec<Arc<dyn UrlPolicy>> {
    vec![Arc::new(ComSubstringPolicy) as Arc<dyn UrlPolicy>]
}
