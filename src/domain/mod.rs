//! Domain layer containing the registry model and its rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (`UrlMapping`, `AuditRecord`)
//! - [`repositories`] - Store trait definitions implemented by the
//!   infrastructure layer
//! - [`validation`] - Batch validation rules for submitted rows
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Store traits define the load-all/save-all contract the registry lives by
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod validation;
