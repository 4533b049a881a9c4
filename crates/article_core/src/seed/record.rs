//! Seed record shape, generation and validation.

use crate::seed::{SeedError, SeedResult};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One persisted seed entry.
///
/// Missing fields decode as empty strings so that `validate` reports them
/// instead of the JSON decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
}

impl SeedRecord {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }
}

/// Record rejected before it can be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRecordError {
    MissingTitle,
    MissingSlug,
}

impl Display for InvalidRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "invalid article: title is missing"),
            Self::MissingSlug => write!(f, "invalid article: slug is missing"),
        }
    }
}

impl Error for InvalidRecordError {}

/// Generates `n` placeholder records, `article-1` through `article-n`.
pub fn generate(n: usize) -> Vec<SeedRecord> {
    (1..=n)
        .map(|i| SeedRecord::new(format!("Article {i}"), format!("article-{i}")))
        .collect()
}

/// Checks that `title` and `slug` are both present.
///
/// Whitespace-only values count as missing. `title` is checked first.
pub fn validate(record: &SeedRecord) -> Result<(), InvalidRecordError> {
    if record.title.trim().is_empty() {
        return Err(InvalidRecordError::MissingTitle);
    }
    if record.slug.trim().is_empty() {
        return Err(InvalidRecordError::MissingSlug);
    }
    Ok(())
}

/// Validates every record, reporting the first failure by index.
pub fn validate_all(records: &[SeedRecord]) -> SeedResult<()> {
    for (index, record) in records.iter().enumerate() {
        validate(record).map_err(|source| SeedError::InvalidRecord { index, source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{generate, validate, validate_all, InvalidRecordError, SeedRecord};
    use crate::seed::SeedError;

    #[test]
    fn generate_numbers_from_one_in_order() {
        let records = generate(3);
        assert_eq!(
            records,
            vec![
                SeedRecord::new("Article 1", "article-1"),
                SeedRecord::new("Article 2", "article-2"),
                SeedRecord::new("Article 3", "article-3"),
            ]
        );
    }

    #[test]
    fn generate_zero_is_empty() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn generated_records_pass_validation() {
        let records = generate(25);
        assert_eq!(records.len(), 25);
        assert!(records.iter().all(|record| validate(record).is_ok()));
        assert_eq!(records[24].slug, "article-25");
    }

    #[test]
    fn validate_reports_missing_fields() {
        assert_eq!(
            validate(&SeedRecord::new("", "slug")),
            Err(InvalidRecordError::MissingTitle)
        );
        assert_eq!(
            validate(&SeedRecord::new("Title", "   ")),
            Err(InvalidRecordError::MissingSlug)
        );
        assert_eq!(
            validate(&SeedRecord::new("", "")),
            Err(InvalidRecordError::MissingTitle)
        );
    }

    #[test]
    fn validate_all_points_at_first_bad_index() {
        let mut records = generate(4);
        records[2].slug.clear();
        records[3].title.clear();

        let err = validate_all(&records).unwrap_err();
        assert!(matches!(
            err,
            SeedError::InvalidRecord {
                index: 2,
                source: InvalidRecordError::MissingSlug
            }
        ));
    }

    #[test]
    fn missing_json_fields_decode_as_empty() {
        let record: SeedRecord = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(record.slug, "");
        assert_eq!(validate(&record), Err(InvalidRecordError::MissingSlug));
    }
}
