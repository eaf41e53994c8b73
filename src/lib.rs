//! # shortbox
//!
//! A self-contained URL shortener with a file-backed registry, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Registry entities, store traits, and
//!   batch validation
//! - **Application Layer** ([`application`]) - The shortener service owning
//!   the registry's read-modify-write lifecycle
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON-file store
//!   implementations
//! - **Web Layer** ([`web`]) - Server-rendered HTML pages
//!
//! ## Features
//!
//! - Batch registration of up to five URLs per submit, all-or-nothing
//! - User-supplied or generated 6-character alphanumeric shortcodes
//! - Per-mapping expiry with a redirect counter
//! - Append-only audit log of every mutation and resolution
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; shown with their defaults
//! export LISTEN="0.0.0.0:3000"
//! export DATA_DIR="data"
//! export BASE_URL="http://localhost:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BatchOutcome, ShortenerService};
    pub use crate::domain::entities::{AuditRecord, UrlMapping};
    pub use crate::domain::validation::CandidateRow;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
