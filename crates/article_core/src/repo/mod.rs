//! Repository layer abstractions and implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep storage details out of service orchestration.
//!
//! # Invariants
//! - Repositories only accept articles that already passed model validation.
//! - Key collisions surface as `RepoError::DuplicateSlug`, never as overwrites.

pub mod article_repo;
