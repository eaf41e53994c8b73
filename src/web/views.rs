//! View models shared by the page templates.

use crate::domain::entities::UrlMapping;

/// One mapping prepared for rendering: short URL assembled from the
/// configured base, expiry formatted for display.
pub struct MappingView {
    pub short_url: String,
    pub url: String,
    pub expires_at: String,
    pub redirect_count: u64,
}

impl MappingView {
    pub fn new(mapping: &UrlMapping, base_url: &str) -> Self {
        Self {
            short_url: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                mapping.shortcode
            ),
            url: mapping.url.clone(),
            expires_at: mapping
                .expires_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            redirect_count: mapping.redirect_count,
        }
    }
}
