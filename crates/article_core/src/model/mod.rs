//! Domain model for slug-keyed articles.
//!
//! # Responsibility
//! - Define the article entity and its variants.
//! - Own slug derivation so every caller shares one definition.
//!
//! # Invariants
//! - An article's slug is always a pure function of `(variant, title)`.

pub mod article;
pub mod slug;
