//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Random shortcode generation

pub mod code_generator;
