//! # Shortener Core
//!
//! The shortcode allocation and resolution core of a URL shortener, built
//! with sqlx and PostgreSQL.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, and URL policies
//! - **Application Layer** ([`application`]) - Shortening, resolution, and
//!   regeneration services plus the shortcode allocator
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL repositories
//!
//! The presentation layer (HTTP routing, HTML, admin commands) is an
//! external collaborator: it consumes [`state::AppState`] and the three
//! services, and is deliberately not part of this crate.
//!
//! ## Guarantees
//!
//! - Shortcode uniqueness is enforced by the store across active and
//!   inactive records; application-level probes are an optimization, never
//!   the authority.
//! - Shortening is idempotent by normalized URL, including under concurrent
//!   creators racing on the same new URL.
//! - Click counting is an atomic store-level increment: N successful
//!   resolutions of a code count exactly N.
//!
//! ## Quick Start
//!
//! ```ignore
//! let config = shortener_core::config::load_from_env()?;
//! let pool = shortener_core::infrastructure::persistence::connect_pool(&config).await?;
//! shortener_core::infrastructure::persistence::run_migrations(&pool).await?;
//!
//! let state = shortener_core::AppState::build(pool, &config);
//! let (record, created) = state.shorten_service.shorten("https://example.com/a").await?;
//! let url = state.resolve_service.resolve(&record.shortcode).await?;
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::allocator::ShortcodeAllocator;
    pub use crate::application::services::{
        RegenerateService, RegenerateSummary, ResolveService, ShortenService,
    };
    pub use crate::domain::entities::{ClickRecord, NewUrlRecord, UrlRecord};
    pub use crate::domain::policy::{ComSubstringPolicy, UrlPolicy, default_policies};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
