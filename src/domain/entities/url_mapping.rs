//! Registry record representing one shortened URL mapping.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Validity applied when a submitted row leaves the field blank, in minutes.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// A single shortcode-to-URL mapping in the registry.
///
/// Records are created only by the batch-submit path and are never edited or
/// deleted afterwards; a record past its expiry stays in the registry but no
/// longer resolves. The serialized form is the fixed on-disk layout of the
/// `shortUrlMappings` table: camelCase field names, timestamps as ISO-8601
/// strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMapping {
    /// The original absolute URL this mapping redirects to.
    pub url: String,
    /// Alphanumeric identifier, unique across the whole registry.
    pub shortcode: String,
    /// Lifetime of the mapping from `created_at`, in minutes.
    pub validity_minutes: u32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Number of successful resolutions; only ever incremented.
    pub redirect_count: u64,
}

impl UrlMapping {
    /// Creates a fresh mapping with `expires_at` derived from the validity.
    ///
    /// `expires_at` is exactly `created_at + validity_minutes * 60s` and the
    /// redirect counter starts at zero.
    pub fn new(
        url: String,
        shortcode: String,
        validity_minutes: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        let expires_at = created_at + Duration::minutes(i64::from(validity_minutes));
        Self {
            url,
            shortcode,
            validity_minutes,
            created_at,
            expires_at,
            redirect_count: 0,
        }
    }

    /// Returns true if the mapping is past its expiry at the given instant.
    ///
    /// The comparison is strict: a resolution at exactly `expires_at` still
    /// succeeds.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
