//! Random shortcode generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated shortcodes.
pub const CODE_LENGTH: usize = 6;

/// Generates a random 6-character shortcode.
///
/// Characters are drawn uniformly from `[A-Za-z0-9]` (62 symbols). The
/// result is not checked for uniqueness; the creation path regenerates on
/// collision against the registry and the batch in progress (see
/// [`crate::application::services::ShortenerService`]).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
