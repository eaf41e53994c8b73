//! Registry orchestration: batch creation, resolution, and listing.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tokio::sync::Mutex;

use crate::domain::entities::{
    AuditRecord, DEFAULT_VALIDITY_MINUTES, RedirectFailReason, UrlMapping,
};
use crate::domain::repositories::{AuditLog, RegistryStore};
use crate::domain::validation::{CandidateRow, ValidationError, validate_batch};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Result of submitting a batch of candidate rows.
#[derive(Debug)]
pub enum BatchOutcome {
    /// Every non-blank row was accepted; carries the new mappings in order.
    Created(Vec<UrlMapping>),
    /// At least one row failed validation; nothing was written.
    Rejected(Vec<ValidationError>),
}

/// Service owning the registry's read-modify-write lifecycle.
///
/// All operations load the full registry, mutate the in-memory snapshot,
/// and write it back in one piece. The two mutating paths serialize on one
/// async mutex held across their load-save window, so concurrent requests
/// within this process cannot interleave writes. A second process sharing
/// the data directory is last-writer-wins; that race is a known limitation.
pub struct ShortenerService<R: RegistryStore, A: AuditLog> {
    registry: Arc<R>,
    audit: Arc<A>,
    write_lock: Mutex<()>,
}

impl<R: RegistryStore, A: AuditLog> ShortenerService<R, A> {
    /// Creates a new service over the given stores.
    pub fn new(registry: Arc<R>, audit: Arc<A>) -> Self {
        Self {
            registry,
            audit,
            write_lock: Mutex::new(()),
        }
    }

    /// Validates and creates a batch of mappings.
    ///
    /// Validation is all-or-nothing: any error rejects the whole batch and
    /// the registry is left untouched. On acceptance, each non-blank row
    /// gets its final shortcode (user-supplied, or generated until unique
    /// against both the registry and the batch so far), `SHORTEN_URL` is
    /// audited per record, and the full registry is persisted in one write.
    /// A batch with no non-blank rows creates nothing and skips the write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when a store operation fails.
    pub async fn shorten_batch(&self, rows: &[CandidateRow]) -> Result<BatchOutcome, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut mappings = self.registry.load_all().await?;
        let mut used_codes: HashSet<String> =
            mappings.iter().map(|m| m.shortcode.clone()).collect();

        let errors = validate_batch(rows, &used_codes);
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "batch rejected by validation");
            return Ok(BatchOutcome::Rejected(errors));
        }

        let now = Utc::now();
        let mut created = Vec::new();

        for row in rows {
            if row.url.is_empty() {
                continue;
            }

            let shortcode = if row.shortcode.is_empty() {
                loop {
                    let code = generate_code();
                    if !used_codes.contains(&code) {
                        break code;
                    }
                }
            } else {
                row.shortcode.clone()
            };
            used_codes.insert(shortcode.clone());

            let validity = row.parsed_validity().unwrap_or(DEFAULT_VALIDITY_MINUTES);
            let mapping = UrlMapping::new(row.url.clone(), shortcode, validity, now);

            self.audit.append(AuditRecord::shorten_url(&mapping)).await?;
            created.push(mapping);
        }

        if created.is_empty() {
            return Ok(BatchOutcome::Created(created));
        }

        mappings.extend(created.iter().cloned());
        self.registry.save_all(&mappings).await?;

        tracing::info!(created = created.len(), total = mappings.len(), "batch persisted");
        Ok(BatchOutcome::Created(created))
    }

    /// Resolves a shortcode, bumping its redirect counter on success.
    ///
    /// The lookup is an exact, case-sensitive match. Outcomes:
    ///
    /// - unknown code: audits `REDIRECT_FAIL {reason: not_found}`, returns
    ///   [`AppError::NotFound`], registry untouched;
    /// - expired (strictly past `expires_at`): audits
    ///   `REDIRECT_FAIL {reason: expired}`, returns [`AppError::Expired`],
    ///   counter untouched;
    /// - otherwise: increments `redirect_count`, persists the registry,
    ///   audits `REDIRECT_SUCCESS`, and returns the updated mapping.
    pub async fn resolve(&self, shortcode: &str) -> Result<UrlMapping, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut mappings = self.registry.load_all().await?;

        let Some(index) = mappings.iter().position(|m| m.shortcode == shortcode) else {
            self.audit
                .append(AuditRecord::redirect_fail(
                    shortcode,
                    RedirectFailReason::NotFound,
                ))
                .await?;
            return Err(AppError::not_found(
                "Short URL not found.",
                json!({ "shortcode": shortcode }),
            ));
        };

        if mappings[index].is_expired_at(Utc::now()) {
            self.audit
                .append(AuditRecord::redirect_fail(
                    shortcode,
                    RedirectFailReason::Expired,
                ))
                .await?;
            return Err(AppError::expired(
                "This short URL has expired.",
                json!({
                    "shortcode": shortcode,
                    "expiresAt": mappings[index].expires_at,
                }),
            ));
        }

        mappings[index].redirect_count += 1;
        self.registry.save_all(&mappings).await?;

        let mapping = mappings[index].clone();
        self.audit
            .append(AuditRecord::redirect_success(shortcode, &mapping.url))
            .await?;

        tracing::debug!(shortcode, count = mapping.redirect_count, "redirect resolved");
        Ok(mapping)
    }

    /// Returns the full registry snapshot in stored order.
    pub async fn list_mappings(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.registry.load_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AuditEventType;
    use crate::domain::repositories::{MockAuditLog, MockRegistryStore};
    use chrono::Duration;

    fn service(
        registry: MockRegistryStore,
        audit: MockAuditLog,
    ) -> ShortenerService<MockRegistryStore, MockAuditLog> {
        ShortenerService::new(Arc::new(registry), Arc::new(audit))
    }

    fn row(url: &str, validity: &str, shortcode: &str) -> CandidateRow {
        CandidateRow {
            url: url.to_string(),
            validity: validity.to_string(),
            shortcode: shortcode.to_string(),
        }
    }

    fn stored_mapping(shortcode: &str, validity: u32) -> UrlMapping {
        UrlMapping::new(
            "https://example.com".to_string(),
            shortcode.to_string(),
            validity,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_shorten_batch_creates_and_persists() {
        let mut registry = MockRegistryStore::new();
        let mut audit = MockAuditLog::new();

        registry.expect_load_all().times(1).returning(|| Ok(vec![]));
        registry
            .expect_save_all()
            .withf(|mappings| {
                mappings.len() == 1
                    && mappings[0].shortcode == "abc123"
                    && mappings[0].redirect_count == 0
            })
            .times(1)
            .returning(|_| Ok(()));

        audit
            .expect_append()
            .withf(|record| record.event_type == AuditEventType::ShortenUrl)
            .times(1)
            .returning(|_| Ok(()));

        let outcome = service(registry, audit)
            .shorten_batch(&[row("https://example.com", "1", "abc123")])
            .await
            .unwrap();

        let BatchOutcome::Created(created) = outcome else {
            panic!("batch should be accepted");
        };
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].validity_minutes, 1);
        assert_eq!(
            created[0].expires_at - created[0].created_at,
            Duration::minutes(1)
        );
    }

    #[tokio::test]
    async fn test_shorten_batch_rejection_writes_nothing() {
        let mut registry = MockRegistryStore::new();
        let mut audit = MockAuditLog::new();

        let existing = stored_mapping("abc123", 30);
        registry
            .expect_load_all()
            .times(1)
            .returning(move || Ok(vec![existing.clone()]));
        registry.expect_save_all().times(0);
        audit.expect_append().times(0);

        let outcome = service(registry, audit)
            .shorten_batch(&[
                row("https://one.example", "", "abc123"),
                row("https://two.example", "", ""),
            ])
            .await
            .unwrap();

        let BatchOutcome::Rejected(errors) = outcome else {
            panic!("duplicate shortcode should reject the batch");
        };
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateShortcode { row: 1 }]
        );
    }

    #[tokio::test]
    async fn test_shorten_batch_generates_unique_codes() {
        let mut registry = MockRegistryStore::new();
        let mut audit = MockAuditLog::new();

        registry.expect_load_all().times(1).returning(|| Ok(vec![]));
        registry
            .expect_save_all()
            .withf(|mappings| {
                mappings.len() == 2
                    && mappings[0].shortcode != mappings[1].shortcode
                    && mappings.iter().all(|m| {
                        m.shortcode.len() == 6
                            && m.shortcode.chars().all(|c| c.is_ascii_alphanumeric())
                    })
            })
            .times(1)
            .returning(|_| Ok(()));

        audit.expect_append().times(2).returning(|_| Ok(()));

        let outcome = service(registry, audit)
            .shorten_batch(&[
                row("https://one.example", "", ""),
                row("https://two.example", "", ""),
            ])
            .await
            .unwrap();

        assert!(matches!(outcome, BatchOutcome::Created(created) if created.len() == 2));
    }

    #[tokio::test]
    async fn test_shorten_batch_defaults_validity_to_30_minutes() {
        let mut registry = MockRegistryStore::new();
        let mut audit = MockAuditLog::new();

        registry.expect_load_all().times(1).returning(|| Ok(vec![]));
        registry.expect_save_all().times(1).returning(|_| Ok(()));
        audit.expect_append().times(1).returning(|_| Ok(()));

        let outcome = service(registry, audit)
            .shorten_batch(&[row("https://example.com", "", "")])
            .await
            .unwrap();

        let BatchOutcome::Created(created) = outcome else {
            panic!("batch should be accepted");
        };
        assert_eq!(created[0].validity_minutes, 30);
        assert_eq!(
            created[0].expires_at - created[0].created_at,
            Duration::minutes(30)
        );
    }

    #[tokio::test]
    async fn test_shorten_batch_all_blank_skips_write() {
        let mut registry = MockRegistryStore::new();
        let mut audit = MockAuditLog::new();

        registry.expect_load_all().times(1).returning(|| Ok(vec![]));
        registry.expect_save_all().times(0);
        audit.expect_append().times(0);

        let outcome = service(registry, audit)
            .shorten_batch(&vec![CandidateRow::default(); 5])
            .await
            .unwrap();

        assert!(matches!(outcome, BatchOutcome::Created(created) if created.is_empty()));
    }

    #[tokio::test]
    async fn test_resolve_increments_counter_and_audits() {
        let mut registry = MockRegistryStore::new();
        let mut audit = MockAuditLog::new();

        let stored = stored_mapping("abc123", 30);
        let other = stored_mapping("other1", 30);
        registry
            .expect_load_all()
            .times(1)
            .returning(move || Ok(vec![stored.clone(), other.clone()]));
        registry
            .expect_save_all()
            .withf(|mappings| {
                mappings.len() == 2
                    && mappings[0].redirect_count == 1
                    && mappings[1].redirect_count == 0
            })
            .times(1)
            .returning(|_| Ok(()));

        audit
            .expect_append()
            .withf(|record| {
                record.event_type == AuditEventType::RedirectSuccess
                    && record.details["shortcode"] == "abc123"
            })
            .times(1)
            .returning(|_| Ok(()));

        let mapping = service(registry, audit).resolve("abc123").await.unwrap();
        assert_eq!(mapping.url, "https://example.com");
        assert_eq!(mapping.redirect_count, 1);
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_is_not_found() {
        let mut registry = MockRegistryStore::new();
        let mut audit = MockAuditLog::new();

        registry.expect_load_all().times(1).returning(|| Ok(vec![]));
        registry.expect_save_all().times(0);

        audit
            .expect_append()
            .withf(|record| {
                record.event_type == AuditEventType::RedirectFail
                    && record.details["reason"] == "not_found"
            })
            .times(1)
            .returning(|_| Ok(()));

        let result = service(registry, audit).resolve("zzz999").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_expired_code_leaves_counter_untouched() {
        let mut registry = MockRegistryStore::new();
        let mut audit = MockAuditLog::new();

        let stored = UrlMapping::new(
            "https://example.com".to_string(),
            "old123".to_string(),
            1,
            Utc::now() - Duration::minutes(5),
        );
        registry
            .expect_load_all()
            .times(1)
            .returning(move || Ok(vec![stored.clone()]));
        registry.expect_save_all().times(0);

        audit
            .expect_append()
            .withf(|record| {
                record.event_type == AuditEventType::RedirectFail
                    && record.details["reason"] == "expired"
            })
            .times(1)
            .returning(|_| Ok(()));

        let result = service(registry, audit).resolve("old123").await;
        assert!(matches!(result.unwrap_err(), AppError::Expired { .. }));
    }

    #[tokio::test]
    async fn test_resolve_is_case_sensitive() {
        let mut registry = MockRegistryStore::new();
        let mut audit = MockAuditLog::new();

        let stored = stored_mapping("abc123", 30);
        registry
            .expect_load_all()
            .times(1)
            .returning(move || Ok(vec![stored.clone()]));
        registry.expect_save_all().times(0);
        audit.expect_append().times(1).returning(|_| Ok(()));

        let result = service(registry, audit).resolve("ABC123").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
