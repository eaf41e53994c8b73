//! File-backed store implementations.
//!
//! Each logical table is one pretty-printed JSON array file under the data
//! directory, named after its fixed key (`shortUrlMappings`, `appLogs`).
//! Reads of a missing file yield the empty table without creating it;
//! writes replace the file through a temp file renamed into place, so a
//! crash mid-write never leaves a half-written array.

mod file_audit_log;
mod file_registry_store;

pub use file_audit_log::FileAuditLog;
pub use file_registry_store::FileRegistryStore;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tempfile::NamedTempFile;

use crate::error::AppError;

/// Reads a whole JSON array file; a missing file is the empty array.
fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(AppError::internal(
                "Failed to read store file",
                json!({ "path": path.display().to_string(), "reason": e.to_string() }),
            ));
        }
    };

    serde_json::from_str(&content).map_err(|e| {
        AppError::internal(
            "Store file is not a valid JSON array",
            json!({ "path": path.display().to_string(), "reason": e.to_string() }),
        )
    })
}

/// Replaces a JSON array file atomically via temp-file-then-rename.
fn write_json_array<T: Serialize>(path: &Path, items: &[T]) -> Result<(), AppError> {
    let io_error = |reason: String| {
        AppError::internal(
            "Failed to write store file",
            json!({ "path": path.display().to_string(), "reason": reason }),
        )
    };

    let dir = path.parent().ok_or_else(|| {
        io_error("store path has no parent directory".to_string())
    })?;
    fs::create_dir_all(dir).map_err(|e| io_error(e.to_string()))?;

    // The temp file lives in the target directory so the rename stays on
    // one filesystem.
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| io_error(e.to_string()))?;
    serde_json::to_writer_pretty(&mut tmp, items).map_err(|e| io_error(e.to_string()))?;
    tmp.write_all(b"\n").map_err(|e| io_error(e.to_string()))?;
    tmp.persist(path).map_err(|e| io_error(e.to_string()))?;

    tracing::debug!(path = %path.display(), items = items.len(), "store file replaced");
    Ok(())
}
