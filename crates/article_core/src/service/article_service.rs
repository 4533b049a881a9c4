//! Article use-case service.
//!
//! # Responsibility
//! - Build and store articles in one call for CLI callers.
//! - Delegate uniqueness enforcement to the repository.
//!
//! # Invariants
//! - Service APIs never bypass model validation or repository uniqueness.
//! - Service layer remains storage-agnostic.

use crate::model::article::{Article, ArticleId, ArticleValidationError, ArticleVariant};
use crate::repo::article_repo::{ArticleRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for article use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleServiceError {
    /// Constructor input rejected by model invariants.
    InvalidArgument(ArticleValidationError),
    /// Persistence-layer rejection.
    Repo(RepoError),
}

impl Display for ArticleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ArticleServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ArticleValidationError> for ArticleServiceError {
    fn from(value: ArticleValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

impl From<RepoError> for ArticleServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ServiceResult<T> = Result<T, ArticleServiceError>;

/// Use-case service wrapper over an article repository.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds an article from raw input and saves it.
    ///
    /// # Contract
    /// - Validation errors are reported before the repository is touched.
    /// - Returns the stored slug on success.
    pub fn publish<I, S>(
        &mut self,
        id: ArticleId,
        variant: ArticleVariant,
        title: &str,
        tags: I,
    ) -> ServiceResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let article = Article::with_tags(id, variant, title, tags)?;
        self.save(article)
    }

    /// Saves an already-built article and returns its slug.
    pub fn save(&mut self, article: Article) -> ServiceResult<String> {
        let slug = article.slug().to_string();
        let id = article.id();
        self.repo.save(article)?;
        info!(
            "event=article_publish module=service status=ok id={} slug={}",
            id, slug
        );
        Ok(slug)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Article> {
        self.repo.find_by_slug(slug)
    }

    pub fn count(&self) -> usize {
        self.repo.count()
    }

    /// Returns every stored article in save order.
    pub fn list(&self) -> Vec<&Article> {
        self.repo
            .slugs()
            .into_iter()
            .filter_map(|slug| self.repo.find_by_slug(slug))
            .collect()
    }

    /// Releases the underlying repository.
    pub fn into_inner(self) -> R {
        self.repo
    }
}
