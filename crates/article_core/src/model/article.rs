//! Article domain model.
//!
//! # Responsibility
//! - Define the article entity stored by slug.
//! - Keep the slug in sync with the title for the article's variant.
//!
//! # Invariants
//! - `id` is positive and never changes after construction.
//! - `title` is trimmed and non-empty.
//! - `slug == derive_key(variant, title)` at all times.
//! - Tags are trimmed, non-empty and only ever appended.

use crate::model::slug::derive_key;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Positive article identifier.
pub type ArticleId = u64;

/// Article sub-kind. Each variant owns its slug derivation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleVariant {
    /// Regular article, slug derived from the title only.
    #[default]
    Plain,
    /// Highlighted article, slug carries the `featured-` marker.
    Featured,
}

/// Constructor/mutator input rejected by the article invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    NonPositiveId,
    EmptyTitle,
    /// Title has no character that survives slug derivation.
    EmptySlug { title: String },
    EmptyTag,
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "article id must be > 0"),
            Self::EmptyTitle => write!(f, "article title is required"),
            Self::EmptySlug { title } => {
                write!(f, "article title `{title}` does not produce a slug")
            }
            Self::EmptyTag => write!(f, "article tag cannot be empty"),
        }
    }
}

impl Error for ArticleValidationError {}

/// Article entity keyed by its derived slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    variant: ArticleVariant,
    title: String,
    slug: String,
    tags: Vec<String>,
}

impl Article {
    /// Creates an article of the given variant with no tags.
    ///
    /// # Errors
    /// - `NonPositiveId` when `id == 0`.
    /// - `EmptyTitle` / `EmptySlug` when the title is unusable.
    pub fn new(
        id: ArticleId,
        variant: ArticleVariant,
        title: impl Into<String>,
    ) -> Result<Self, ArticleValidationError> {
        if id == 0 {
            return Err(ArticleValidationError::NonPositiveId);
        }
        let (title, slug) = normalize_title(variant, title.into())?;
        Ok(Self {
            id,
            variant,
            title,
            slug,
            tags: Vec::new(),
        })
    }

    /// Plain-article factory.
    pub fn from_title(
        id: ArticleId,
        title: impl Into<String>,
    ) -> Result<Self, ArticleValidationError> {
        Self::new(id, ArticleVariant::Plain, title)
    }

    /// Featured-article factory.
    pub fn featured(
        id: ArticleId,
        title: impl Into<String>,
    ) -> Result<Self, ArticleValidationError> {
        Self::new(id, ArticleVariant::Featured, title)
    }

    /// Creates an article and appends `tags` in order.
    ///
    /// Fails on the first empty tag without returning a partial article.
    pub fn with_tags<I, S>(
        id: ArticleId,
        variant: ArticleVariant,
        title: impl Into<String>,
        tags: I,
    ) -> Result<Self, ArticleValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut article = Self::new(id, variant, title)?;
        for tag in tags {
            article.add_tag(tag.as_ref())?;
        }
        Ok(article)
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn variant(&self) -> ArticleVariant {
        self.variant
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replaces the title and recomputes the slug.
    ///
    /// On error the article keeps its previous title and slug.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ArticleValidationError> {
        let (title, slug) = normalize_title(self.variant, title.into())?;
        self.title = title;
        self.slug = slug;
        Ok(())
    }

    /// Appends one trimmed tag.
    pub fn add_tag(&mut self, tag: &str) -> Result<(), ArticleValidationError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ArticleValidationError::EmptyTag);
        }
        self.tags.push(tag.to_string());
        Ok(())
    }
}

fn normalize_title(
    variant: ArticleVariant,
    title: String,
) -> Result<(String, String), ArticleValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ArticleValidationError::EmptyTitle);
    }
    // Featured slugs always carry the prefix, so check the plain form.
    if derive_key(ArticleVariant::Plain, title).is_empty() {
        return Err(ArticleValidationError::EmptySlug {
            title: title.to_string(),
        });
    }
    Ok((title.to_string(), derive_key(variant, title)))
}
