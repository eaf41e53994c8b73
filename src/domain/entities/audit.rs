//! Audit events appended to the `appLogs` table.
//!
//! Every mutation and resolution writes one record here. This is a product
//! feature (the application's own event trail), distinct from the `tracing`
//! diagnostics the process emits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::entities::UrlMapping;

/// Kind of audit event, serialized with its exact wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditEventType {
    #[serde(rename = "SHORTEN_URL")]
    ShortenUrl,
    #[serde(rename = "REDIRECT_SUCCESS")]
    RedirectSuccess,
    #[serde(rename = "REDIRECT_FAIL")]
    RedirectFail,
}

/// Reason carried in the details of a `REDIRECT_FAIL` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectFailReason {
    NotFound,
    Expired,
}

/// One entry in the append-only audit table.
///
/// `details` is a free-form JSON object whose shape depends on the event
/// type; the constructors below produce the canonical layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub timestamp: DateTime<Utc>,
    pub event_type: AuditEventType,
    pub details: Value,
}

impl AuditRecord {
    /// Creates a record stamped with the current time.
    pub fn new(event_type: AuditEventType, details: Value) -> Self {
        Self {
            timestamp: Utc::now(),
            event_type,
            details,
        }
    }

    /// Event emitted for each mapping created by a batch submit.
    pub fn shorten_url(mapping: &UrlMapping) -> Self {
        Self::new(
            AuditEventType::ShortenUrl,
            json!({
                "url": mapping.url,
                "shortcode": mapping.shortcode,
                "validity": mapping.validity_minutes,
                "createdAt": mapping.created_at,
                "expiresAt": mapping.expires_at,
            }),
        )
    }

    /// Event emitted when a shortcode resolves and the counter is bumped.
    pub fn redirect_success(shortcode: &str, url: &str) -> Self {
        Self::new(
            AuditEventType::RedirectSuccess,
            json!({ "shortcode": shortcode, "url": url }),
        )
    }

    /// Event emitted when resolution fails, with the failure reason.
    pub fn redirect_fail(shortcode: &str, reason: RedirectFailReason) -> Self {
        Self::new(
            AuditEventType::RedirectFail,
            json!({ "shortcode": shortcode, "reason": reason }),
        )
    }
}
