//! Core domain logic for slug-keyed articles and seed files.
//! This crate is the single source of truth for article and seed invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::article::{Article, ArticleId, ArticleValidationError, ArticleVariant};
pub use model::slug::{derive_key, FeaturedSlug, KeyDeriver, PlainSlug, FEATURED_PREFIX};
pub use repo::article_repo::{
    ArticleRepository, InMemoryArticleRepository, RepoError, RepoResult,
};
pub use seed::{
    atomic_write, generate, merge_external, run_seed, validate, ExternalStatus, InvalidRecordError,
    SeedConfig, SeedError, SeedOverrides, SeedRecord, SeedReport, SeedResult,
};
pub use service::article_service::{ArticleService, ArticleServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
