//! Web layer rendering the shortener pages.
//!
//! Every page is server-rendered with Askama templates; there is no JSON
//! API surface.

pub mod handlers;
pub mod views;
