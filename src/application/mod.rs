//! Application layer orchestrating domain operations over the stores.

pub mod services;
