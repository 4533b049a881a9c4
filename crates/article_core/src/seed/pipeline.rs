//! Seed run orchestration: generate, validate, merge, write.

use crate::seed::config::SeedConfig;
use crate::seed::merge::{load_external, merge_external, ExternalRecords};
use crate::seed::record::{generate, validate_all};
use crate::seed::writer::atomic_write;
use crate::seed::SeedResult;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// What happened to the external record file during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalStatus {
    Disabled,
    Absent,
    /// Present but unusable; the run continued without it.
    Ignored { path: PathBuf, reason: String },
    Merged { loaded: usize, skipped: usize },
}

/// Summary of a completed seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub output_path: PathBuf,
    /// Records produced by `generate`.
    pub generated: usize,
    /// Records in the written file after the merge.
    pub written: usize,
    pub external: ExternalStatus,
}

/// Runs one seed pass into `output_path`.
///
/// Validation failures abort before anything touches the filesystem.
pub fn run_seed(output_path: &Path, count: usize, config: &SeedConfig) -> SeedResult<SeedReport> {
    let records = generate(count);
    validate_all(&records)?;

    let (records, external) = match config.extra_path.as_deref() {
        None => (records, ExternalStatus::Disabled),
        Some(extra_path) => match load_external(extra_path) {
            ExternalRecords::Absent => (records, ExternalStatus::Absent),
            ExternalRecords::Invalid { reason } => (
                records,
                ExternalStatus::Ignored {
                    path: extra_path.to_path_buf(),
                    reason,
                },
            ),
            ExternalRecords::Loaded {
                records: extra,
                skipped,
            } => {
                let loaded = extra.len();
                (
                    merge_external(records, extra),
                    ExternalStatus::Merged { loaded, skipped },
                )
            }
        },
    };

    if let Err(err) = atomic_write(output_path, &records, config.indent) {
        warn!(
            "event=seed_run module=seed status=error path={} error={}",
            output_path.display(),
            err
        );
        return Err(err);
    }

    info!(
        "event=seed_run module=seed status=ok path={} generated={} written={}",
        output_path.display(),
        count,
        records.len()
    );

    Ok(SeedReport {
        output_path: output_path.to_path_buf(),
        generated: count,
        written: records.len(),
        external,
    })
}
