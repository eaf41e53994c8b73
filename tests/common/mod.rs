#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shortbox::application::services::ShortenerService;
use shortbox::domain::entities::UrlMapping;
use shortbox::infrastructure::persistence::{FileAuditLog, FileRegistryStore};
use shortbox::state::AppState;
use tempfile::TempDir;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds an `AppState` over file stores in a fresh temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test; dropping
/// it deletes the store files.
pub fn create_test_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();

    let registry = Arc::new(FileRegistryStore::new(dir.path()));
    let audit = Arc::new(FileAuditLog::new(dir.path()));
    let shortener = Arc::new(ShortenerService::new(registry, audit));

    let state = AppState {
        shortener,
        base_url: TEST_BASE_URL.to_string(),
    };

    (state, dir)
}

/// Reads the raw registry table, empty when never written.
pub fn read_registry(dir: &TempDir) -> Vec<serde_json::Value> {
    read_table(dir, "shortUrlMappings")
}

/// Reads the raw audit table, empty when never written.
pub fn read_logs(dir: &TempDir) -> Vec<serde_json::Value> {
    read_table(dir, "appLogs")
}

fn read_table(dir: &TempDir, key: &str) -> Vec<serde_json::Value> {
    let path = dir.path().join(format!("{key}.json"));
    if !path.exists() {
        return Vec::new();
    }
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

pub fn registry_file_exists(dir: &TempDir) -> bool {
    dir.path().join("shortUrlMappings.json").exists()
}

/// Seeds the registry file with the given mappings directly.
pub fn seed_registry(dir: &TempDir, mappings: &[UrlMapping]) {
    let path = dir.path().join("shortUrlMappings.json");
    std::fs::write(path, serde_json::to_string_pretty(mappings).unwrap()).unwrap();
}

pub fn mapping_created_at(url: &str, shortcode: &str, validity: u32, created_at: &str) -> UrlMapping {
    UrlMapping::new(
        url.to_string(),
        shortcode.to_string(),
        validity,
        created_at.parse::<DateTime<Utc>>().unwrap(),
    )
}

pub fn fresh_mapping(url: &str, shortcode: &str, validity: u32) -> UrlMapping {
    UrlMapping::new(url.to_string(), shortcode.to_string(), validity, Utc::now())
}
