//! Core domain entities representing the registry data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`UrlMapping`] - one shortcode-to-URL mapping
//! - [`AuditRecord`] - one entry in the append-only audit table
//!
//! Both carry their fixed serialized layout (camelCase fields, ISO-8601
//! timestamps) so the on-disk tables stay stable across versions.

pub mod audit;
pub mod url_mapping;

pub use audit::{AuditEventType, AuditRecord, RedirectFailReason};
pub use url_mapping::{DEFAULT_VALIDITY_MINUTES, UrlMapping};
