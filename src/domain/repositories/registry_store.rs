//! Store trait for the URL-mapping registry.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for the registry of URL mappings.
///
/// The registry is one ordered collection, read in full and written back in
/// full; there are no partial updates. Callers that mutate must hold the
/// write lock across their load-save window (see
/// [`crate::application::services::ShortenerService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileRegistryStore`] - JSON file store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Loads the full registry snapshot in stored order.
    ///
    /// A store that has never been written yields the empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O or deserialization errors.
    async fn load_all(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Replaces the whole registry in one write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O or serialization errors.
    async fn save_all(&self, mappings: &[UrlMapping]) -> Result<(), AppError>;
}
