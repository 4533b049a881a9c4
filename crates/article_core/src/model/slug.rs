//! Slug derivation strategies.
//!
//! # Responsibility
//! - Turn display titles into URL-safe keys.
//! - Let each article variant supply its own derivation strategy.
//!
//! # Invariants
//! - Derivation is a pure function of `(variant, title)`.
//! - Plain slugs only contain `[a-z0-9-]`, never start or end with `-` and
//!   never contain `--`, so re-deriving a plain slug returns it unchanged.

use crate::model::article::ArticleVariant;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Separator placed between slug words.
pub const SLUG_SEPARATOR: char = '-';
/// Marker prepended to every featured slug.
pub const FEATURED_PREFIX: &str = "featured-";

static NON_SLUG_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug separator regex"));

/// Capability for turning a title into a store key.
pub trait KeyDeriver {
    fn derive_key(&self, title: &str) -> String;
}

/// Base strategy: accent folding, lowercase, separator collapsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainSlug;

/// Featured strategy: [`FEATURED_PREFIX`] followed by the plain slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeaturedSlug;

impl KeyDeriver for PlainSlug {
    fn derive_key(&self, title: &str) -> String {
        let folded = fold_accents(&title.to_lowercase());
        let collapsed = NON_SLUG_RUN_RE.replace_all(&folded, "-");
        collapsed.trim_matches(SLUG_SEPARATOR).to_string()
    }
}

impl KeyDeriver for FeaturedSlug {
    fn derive_key(&self, title: &str) -> String {
        format!("{FEATURED_PREFIX}{}", PlainSlug.derive_key(title))
    }
}

impl ArticleVariant {
    /// Returns the derivation strategy bound to this variant.
    pub fn key_deriver(self) -> &'static dyn KeyDeriver {
        match self {
            Self::Plain => &PlainSlug,
            Self::Featured => &FeaturedSlug,
        }
    }
}

/// Derives the store key for `title` under `variant`.
pub fn derive_key(variant: ArticleVariant, title: &str) -> String {
    variant.key_deriver().derive_key(title)
}

// NFD splits "é" into "e" + U+0301; dropping the marks keeps the base letter.
fn fold_accents(value: &str) -> String {
    value.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::{derive_key, fold_accents, FeaturedSlug, KeyDeriver, PlainSlug};
    use crate::model::article::ArticleVariant;

    #[test]
    fn plain_slug_folds_accents_and_collapses_separators() {
        assert_eq!(PlainSlug.derive_key("Laravel avancé"), "laravel-avance");
        assert_eq!(
            PlainSlug.derive_key("Encapsulation & visibilité en PHP"),
            "encapsulation-visibilite-en-php"
        );
        assert_eq!(PlainSlug.derive_key("  --Hello,   World!-- "), "hello-world");
    }

    #[test]
    fn plain_slug_keeps_digits() {
        assert_eq!(PlainSlug.derive_key("Article 42"), "article-42");
    }

    #[test]
    fn plain_slug_is_idempotent() {
        for title in ["Lire moins, comprendre plus", "Ça marche ?", "a--b__c"] {
            let once = PlainSlug.derive_key(title);
            assert_eq!(PlainSlug.derive_key(&once), once, "title: {title}");
        }
    }

    #[test]
    fn featured_slug_prefixes_plain_slug() {
        assert_eq!(
            FeaturedSlug.derive_key("Lire moins, comprendre plus"),
            "featured-lire-moins-comprendre-plus"
        );
    }

    #[test]
    fn derive_key_dispatches_by_variant() {
        assert_eq!(derive_key(ArticleVariant::Plain, "Same Title"), "same-title");
        assert_eq!(
            derive_key(ArticleVariant::Featured, "Same Title"),
            "featured-same-title"
        );
    }

    #[test]
    fn symbols_only_title_yields_empty_plain_slug() {
        assert_eq!(PlainSlug.derive_key("!!! ???"), "");
    }

    #[test]
    fn fold_accents_strips_combining_marks() {
        assert_eq!(fold_accents("àéîõü"), "aeiou");
    }
}
