//! Seed file generation.
//!
//! # Responsibility
//! - Generate and validate placeholder article records.
//! - Merge an optional external record set, deduplicated by slug.
//! - Persist the result with write-then-rename.
//!
//! # Invariants
//! - Every written record has a non-empty `title` and `slug`.
//! - A failed run never leaves a partially written target file.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod config;
pub mod merge;
pub mod pipeline;
pub mod record;
pub mod writer;

pub use config::{SeedConfig, SeedOverrides};
pub use merge::{load_external, merge_external, ExternalRecords};
pub use pipeline::{run_seed, ExternalStatus, SeedReport};
pub use record::{generate, validate, validate_all, InvalidRecordError, SeedRecord};
pub use writer::atomic_write;

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Debug)]
pub enum SeedError {
    /// Record at `index` failed validation.
    InvalidRecord {
        index: usize,
        source: InvalidRecordError,
    },
    /// Bad caller input such as an out-of-range option.
    InvalidArgument(String),
    /// Output path has no file name component.
    InvalidPath(PathBuf),
    Serialize(serde_json::Error),
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecord { index, source } => {
                write!(f, "record #{index}: {source}")
            }
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::InvalidPath(path) => write!(f, "invalid output path `{}`", path.display()),
            Self::Serialize(err) => write!(f, "failed to encode records: {err}"),
            Self::Write { path, source } => {
                write!(f, "cannot write `{}`: {source}", path.display())
            }
            Self::Rename { from, to, source } => write!(
                f,
                "cannot rename `{}` to `{}`: {source}",
                from.display(),
                to.display()
            ),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRecord { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::Write { source, .. } => Some(source),
            Self::Rename { source, .. } => Some(source),
            Self::InvalidArgument(_) | Self::InvalidPath(_) => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
