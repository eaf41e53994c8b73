//! Data access trait definitions.
//!
//! These traits are the injection seam between the domain and the file
//! stores: services depend on them, the infrastructure layer implements
//! them, and tests mock them.

pub mod audit_log;
pub mod registry_store;

pub use audit_log::AuditLog;
pub use registry_store::RegistryStore;

#[cfg(test)]
pub use audit_log::MockAuditLog;
#[cfg(test)]
pub use registry_store::MockRegistryStore;
