//! File-backed registry store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{read_json_array, write_json_array};
use crate::domain::entities::UrlMapping;
use crate::domain::repositories::RegistryStore;
use crate::error::AppError;

/// Fixed key of the registry table; the file is `<key>.json`.
pub const REGISTRY_KEY: &str = "shortUrlMappings";

/// Registry store persisting the full mapping array to one JSON file.
pub struct FileRegistryStore {
    path: PathBuf,
}

impl FileRegistryStore {
    /// Creates a store rooted in the given data directory.
    ///
    /// Nothing touches disk until the first write; a directory that does
    /// not exist yet simply reads as the empty registry.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{REGISTRY_KEY}.json")),
        }
    }
}

#[async_trait]
impl RegistryStore for FileRegistryStore {
    async fn load_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        read_json_array(&self.path)
    }

    async fn save_all(&self, mappings: &[UrlMapping]) -> Result<(), AppError> {
        write_json_array(&self.path, mappings)
    }
}
