//! Store trait for the append-only audit table.

use crate::domain::entities::AuditRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for the `appLogs` audit table.
///
/// Records are only ever appended; nothing edits or removes them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileAuditLog`] - JSON file store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Appends one record to the end of the table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O or serialization errors.
    async fn append(&self, record: AuditRecord) -> Result<(), AppError>;

    /// Loads all records in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O or deserialization errors.
    async fn load_all(&self) -> Result<Vec<AuditRecord>, AppError>;
}
