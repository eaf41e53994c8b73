//! Infrastructure layer implementing the domain store traits.
//!
//! The only backend is the local file store: one JSON array file per
//! logical table inside the configured data directory.

pub mod persistence;
