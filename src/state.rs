//! Composition root wiring pool and configuration into services.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::allocator::ShortcodeAllocator;
use crate::application::services::{RegenerateService, ResolveService, ShortenService};
use crate::config::Config;
use crate::domain::policy::{UrlPolicy, default_policies};
use crate::infrastructure::persistence::{PgClickRepository, PgUrlRecordRepository};

/// Fully wired core services over the PostgreSQL repositories.
///
/// The presentation layer (out of scope here) clones this state and calls
/// the three services; nothing else holds per-request state.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<PgUrlRecordRepository>>,
    pub resolve_service: Arc<ResolveService<PgUrlRecordRepository, PgClickRepository>>,
    pub regenerate_service: Arc<RegenerateService<PgUrlRecordRepository>>,
}

impl AppState {
    /// Builds the services with the default URL policy list.
    pub fn build(pool: PgPool, config: &Config) -> Self {
        Self::build_with_policies(pool, config, default_policies())
    }

    /// Builds the services with an explicit URL policy list.
    pub fn build_with_policies(
        pool: PgPool,
        config: &Config,
        policies: Vec<Arc<dyn UrlPolicy>>,
    ) -> Self {
        let pool = Arc::new(pool);

        let url_repository = Arc::new(PgUrlRecordRepository::new(Arc::clone(&pool)));
        let click_repository = Arc::new(PgClickRepository::new(Arc::clone(&pool)));

        let allocator = ShortcodeAllocator::new(Arc::clone(&url_repository), config);

        let shorten_service = Arc::new(ShortenService::new(
            Arc::clone(&url_repository),
            allocator.clone(),
            policies,
        ));
        let resolve_service = Arc::new(ResolveService::new(
            Arc::clone(&url_repository),
            Arc::clone(&click_repository),
        ));
        let regenerate_service = Arc::new(RegenerateService::new(url_repository, allocator));

        Self {
            shorten_service,
            resolve_service,
            regenerate_service,
        }
    }
}
