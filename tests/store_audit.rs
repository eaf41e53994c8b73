mod common;

use shortbox::AppError;
use shortbox::domain::entities::{AuditRecord, RedirectFailReason};
use shortbox::domain::repositories::AuditLog;
use shortbox::infrastructure::persistence::FileAuditLog;

#[tokio::test]
async fn test_missing_file_loads_as_empty_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = FileAuditLog::new(dir.path());

    assert!(log.load_all().await.unwrap().is_empty());
    assert!(!dir.path().join("appLogs.json").exists());
}

#[tokio::test]
async fn test_append_preserves_existing_records() {
    let dir = tempfile::tempdir().unwrap();
    let log = FileAuditLog::new(dir.path());

    let mapping = common::fresh_mapping("https://example.com", "abc123", 1);
    log.append(AuditRecord::shorten_url(&mapping)).await.unwrap();
    log.append(AuditRecord::redirect_success("abc123", "https://example.com"))
        .await
        .unwrap();
    log.append(AuditRecord::redirect_fail("zzz999", RedirectFailReason::NotFound))
        .await
        .unwrap();

    let records = log.load_all().await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].details["shortcode"], "abc123");
    assert_eq!(records[2].details["reason"], "not_found");
}

#[tokio::test]
async fn test_file_uses_fixed_key_and_wire_layout() {
    let dir = tempfile::tempdir().unwrap();
    let log = FileAuditLog::new(dir.path());

    log.append(AuditRecord::redirect_fail("gone42", RedirectFailReason::Expired))
        .await
        .unwrap();

    let content = std::fs::read_to_string(dir.path().join("appLogs.json")).unwrap();
    let raw: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();

    assert_eq!(raw.len(), 1);
    assert!(raw[0]["timestamp"].is_string());
    assert_eq!(raw[0]["eventType"], "REDIRECT_FAIL");
    assert_eq!(raw[0]["details"]["shortcode"], "gone42");
    assert_eq!(raw[0]["details"]["reason"], "expired");
}

#[tokio::test]
async fn test_corrupt_file_surfaces_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("appLogs.json"), "[{]").unwrap();

    let log = FileAuditLog::new(dir.path());
    let result = log.load_all().await;
    assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
}
