//! Crash-safe JSON file writer.
//!
//! # Invariants
//! - Readers of the target path see either the previous content or the new
//!   content, never a partial write.
//! - Each call writes through its own sibling temp file, so concurrent
//!   writers never share a temp path.
//! - On failure the target is untouched and the temp file is removed.

use crate::seed::{SeedError, SeedResult};
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Serializes `data` as pretty JSON and atomically replaces `path`.
///
/// Non-ASCII characters are written as-is, never `\u` escaped.
///
/// # Errors
/// - `InvalidPath` when `path` has no file name.
/// - `Serialize` when `data` cannot be encoded.
/// - `Write` when the temp file cannot be written.
/// - `Rename` when the temp file cannot replace the target.
pub fn atomic_write<T>(path: &Path, data: &T, indent: usize) -> SeedResult<()>
where
    T: Serialize + ?Sized,
{
    let bytes = to_pretty_json(data, indent)?;
    let tmp_path = temp_path_for(path)?;

    if let Err(source) = write_synced(&tmp_path, &bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SeedError::Write {
            path: tmp_path,
            source,
        });
    }

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SeedError::Rename {
            from: tmp_path,
            to: path.to_path_buf(),
            source,
        });
    }

    debug!(
        "event=atomic_write module=seed status=ok path={} bytes={}",
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Encodes `data` with `indent` spaces per nesting level.
pub fn to_pretty_json<T>(data: &T, indent: usize) -> SeedResult<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    data.serialize(&mut serializer)?;
    Ok(out)
}

/// Sibling temp path: `<dir>/.<file>.<uuid>.tmp`.
fn temp_path_for(path: &Path) -> SeedResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| SeedError::InvalidPath(path.to_path_buf()))?;
    let tmp_name = format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4().simple()
    );
    Ok(match path.parent() {
        Some(parent) => parent.join(tmp_name),
        None => PathBuf::from(tmp_name),
    })
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
