//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model construction and repository calls into use-case APIs.
//! - Keep CLI layers decoupled from storage details.

pub mod article_service;
