//! File-backed audit log.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{read_json_array, write_json_array};
use crate::domain::entities::AuditRecord;
use crate::domain::repositories::AuditLog;
use crate::error::AppError;

/// Fixed key of the audit table; the file is `<key>.json`.
pub const AUDIT_LOG_KEY: &str = "appLogs";

/// Audit log persisting the append-only record array to one JSON file.
///
/// Appends are read-push-write over the full array; callers that need
/// appends ordered against registry writes already serialize through the
/// service write lock.
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    /// Creates a log rooted in the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{AUDIT_LOG_KEY}.json")),
        }
    }
}

#[async_trait]
impl AuditLog for FileAuditLog {
    async fn append(&self, record: AuditRecord) -> Result<(), AppError> {
        let mut records: Vec<AuditRecord> = read_json_array(&self.path)?;
        records.push(record);
        write_json_array(&self.path, &records)
    }

    async fn load_all(&self) -> Result<Vec<AuditRecord>, AppError> {
        read_json_array(&self.path)
    }
}
