//! External record loading and slug-keyed merge.
//!
//! # Invariants
//! - The merged output holds exactly one record per distinct slug.
//! - Later records win over earlier ones with the same slug; each slug
//!   keeps the position where it first appeared.
//! - A present-but-malformed external file never aborts a run.

use crate::seed::record::{validate, SeedRecord};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of reading the optional external record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalRecords {
    /// No file at the configured path.
    Absent,
    /// File exists but is unreadable or not a JSON array.
    Invalid { reason: String },
    /// Usable records plus the count of array entries that were dropped.
    Loaded {
        records: Vec<SeedRecord>,
        skipped: usize,
    },
}

/// Reads external records from `path`.
///
/// Array entries that are not objects, or that fail `validate`, are skipped
/// with a warning instead of invalidating the whole file.
pub fn load_external(path: &Path) -> ExternalRecords {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(
                "event=external_load module=seed status=absent path={}",
                path.display()
            );
            return ExternalRecords::Absent;
        }
        Err(err) => {
            return invalid(path, format!("cannot read file: {err}"));
        }
    };

    let items = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => return invalid(path, "expected a JSON array".to_string()),
        Err(err) => return invalid(path, format!("malformed JSON: {err}")),
    };

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for (index, item) in items.into_iter().enumerate() {
        let parsed = serde_json::from_value::<SeedRecord>(item)
            .map_err(|err| err.to_string())
            .and_then(|record| {
                validate(&record)
                    .map(|()| record)
                    .map_err(|err| err.to_string())
            });
        match parsed {
            Ok(record) => records.push(record),
            Err(reason) => {
                skipped += 1;
                warn!(
                    "event=external_entry module=seed status=skipped path={} index={} reason={}",
                    path.display(),
                    index,
                    reason
                );
            }
        }
    }

    debug!(
        "event=external_load module=seed status=ok path={} records={} skipped={}",
        path.display(),
        records.len(),
        skipped
    );
    ExternalRecords::Loaded { records, skipped }
}

/// Concatenates `records` and `external`, keeping the last record per slug.
pub fn merge_external(records: Vec<SeedRecord>, external: Vec<SeedRecord>) -> Vec<SeedRecord> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<SeedRecord> = Vec::with_capacity(records.len() + external.len());

    for record in records.into_iter().chain(external) {
        match positions.get(&record.slug) {
            Some(&index) => merged[index] = record,
            None => {
                positions.insert(record.slug.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

fn invalid(path: &Path, reason: String) -> ExternalRecords {
    warn!(
        "event=external_load module=seed status=ignored path={} reason={}",
        path.display(),
        reason
    );
    ExternalRecords::Invalid { reason }
}
