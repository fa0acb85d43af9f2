//! Business logic services for the application layer.

pub mod regenerate_service;
pub mod resolve_service;
pub mod shorten_service;

pub use regenerate_service::{RegenerateService, RegenerateSummary};
pub use resolve_service::ResolveService;
pub use shorten_service::ShortenService;
