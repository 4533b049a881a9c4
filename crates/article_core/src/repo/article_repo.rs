//! Article repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Store articles keyed by slug.
//! - Reject slug collisions with a semantic error.
//!
//! # Invariants
//! - No two stored articles share a slug.
//! - A rejected `save` leaves the store exactly as it was.
//! - Entries are never removed.

use crate::model::article::{Article, ArticleId};
use log::{debug, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for article persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Another article already owns this slug.
    DuplicateSlug { slug: String, existing_id: ArticleId },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSlug { slug, existing_id } => write!(
                f,
                "slug `{slug}` already used by article {existing_id}"
            ),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for slug-keyed articles.
pub trait ArticleRepository {
    /// Stores `article` under its slug.
    fn save(&mut self, article: Article) -> RepoResult<()>;
    /// Pure lookup by slug.
    fn find_by_slug(&self, slug: &str) -> Option<&Article>;
    /// Number of successfully saved articles.
    fn count(&self) -> usize;
    /// Stored slugs in save order.
    fn slugs(&self) -> Vec<&str>;
}

/// Process-local article store.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    by_slug: HashMap<String, Article>,
    order: Vec<String>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn save(&mut self, article: Article) -> RepoResult<()> {
        if let Some(existing) = self.by_slug.get(article.slug()) {
            warn!(
                "event=article_save module=repo status=rejected reason=duplicate_slug slug={} existing_id={} id={}",
                article.slug(),
                existing.id(),
                article.id()
            );
            return Err(RepoError::DuplicateSlug {
                slug: article.slug().to_string(),
                existing_id: existing.id(),
            });
        }

        debug!(
            "event=article_save module=repo status=ok slug={} id={}",
            article.slug(),
            article.id()
        );
        let slug = article.slug().to_string();
        self.order.push(slug.clone());
        self.by_slug.insert(slug, article);
        Ok(())
    }

    fn find_by_slug(&self, slug: &str) -> Option<&Article> {
        self.by_slug.get(slug)
    }

    fn count(&self) -> usize {
        self.order.len()
    }

    fn slugs(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}
