//! Batch validation for submitted shortener rows.
//!
//! The submit form carries up to five candidate rows. Validation is
//! all-or-nothing: any error rejects the whole batch and nothing is written
//! to the registry. Errors accumulate across rows in rule order and carry
//! the 1-based row number they refer to.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Maximum number of candidate rows accepted per submit.
pub const MAX_ROWS: usize = 5;

/// Compiled regex for the validity field (digits only).
static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Compiled regex for user-supplied shortcodes.
static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").unwrap());

/// One submitted row, exactly as entered (no trimming).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRow {
    pub url: String,
    pub validity: String,
    pub shortcode: String,
}

impl CandidateRow {
    /// A row with all three fields empty is skipped entirely.
    pub fn is_blank(&self) -> bool {
        self.url.is_empty() && self.validity.is_empty() && self.shortcode.is_empty()
    }

    /// Parses the validity field, `None` when blank or out of range.
    ///
    /// After [`validate_batch`] accepts a batch this only returns `None`
    /// for blank fields, which take the default validity.
    pub fn parsed_validity(&self) -> Option<u32> {
        if self.validity.is_empty() {
            None
        } else {
            self.validity.parse().ok()
        }
    }
}

/// A single validation failure, tied to its 1-based row.
///
/// The rendered messages are the exact texts shown on the submit page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Row {row}: URL is required.")]
    MissingUrl { row: usize },

    #[error("Row {row}: Invalid URL format.")]
    InvalidUrlFormat { row: usize },

    #[error("Row {row}: Validity must be a positive integer.")]
    InvalidValidity { row: usize },

    #[error("Row {row}: Shortcode must be alphanumeric.")]
    InvalidShortcodeFormat { row: usize },

    #[error("Row {row}: Shortcode must be unique.")]
    DuplicateShortcode { row: usize },
}

/// Validates a submitted batch against the set of already-registered codes.
///
/// Returns the accumulated error list; an empty list means every non-blank
/// row is acceptable. Per row the rules run in order:
///
/// 1. `url` is required and must parse as an absolute URL;
/// 2. `validity`, when present, must be a digit string for a positive
///    integer (values past `u32` are rejected);
/// 3. `shortcode`, when present, must be alphanumeric and unique against
///    both `existing_codes` and earlier rows of the same batch.
///
/// A shortcode claims its spot in the batch even when another rule failed
/// for it, so a later row reusing it still reports a duplicate.
pub fn validate_batch(
    rows: &[CandidateRow],
    existing_codes: &HashSet<String>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut batch_codes: HashSet<&str> = HashSet::new();

    for (idx, candidate) in rows.iter().enumerate() {
        let row = idx + 1;
        if candidate.is_blank() {
            continue;
        }

        if candidate.url.is_empty() {
            errors.push(ValidationError::MissingUrl { row });
        } else if Url::parse(&candidate.url).is_err() {
            errors.push(ValidationError::InvalidUrlFormat { row });
        }

        if !candidate.validity.is_empty()
            && (!DIGITS_REGEX.is_match(&candidate.validity)
                || candidate.parsed_validity().is_none_or(|v| v == 0))
        {
            errors.push(ValidationError::InvalidValidity { row });
        }

        if !candidate.shortcode.is_empty() {
            if !ALPHANUMERIC_REGEX.is_match(&candidate.shortcode) {
                errors.push(ValidationError::InvalidShortcodeFormat { row });
            } else if batch_codes.contains(candidate.shortcode.as_str())
                || existing_codes.contains(&candidate.shortcode)
            {
                errors.push(ValidationError::DuplicateShortcode { row });
            }
            batch_codes.insert(&candidate.shortcode);
        }
    }

    errors
}
