//! HTML page handlers.

mod redirect;
mod shorten;
mod stats;

pub use redirect::redirect_handler;
pub use shorten::{shorten_page, shorten_submit};
pub use stats::stats_handler;
