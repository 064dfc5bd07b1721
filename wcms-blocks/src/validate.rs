//! Structural validation for blocks.
//!
//! Every constraint an edit form promises (required fields, length ceilings,
//! choice sets, child counts) is enforced here at save time, so no invalid
//! block ever reaches the store, the renderer, or the search index.

use thiserror::Error;

/// Ceiling for short text fields (captions, attributions).
pub const SHORT_TEXT_MAX_CHARS: usize = 255;

/// A block-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{block}: field `{field}` is required")]
    MissingField {
        block: &'static str,
        field: &'static str,
    },

    #[error("{block}: field `{field}` exceeds {max} characters (got {len})")]
    TooLong {
        block: &'static str,
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("{block}: field `{field}` must contain at least one item")]
    EmptyList {
        block: &'static str,
        field: &'static str,
    },

    #[error("two-column block must contain exactly {expected} blocks (got {found})")]
    ColumnCount { expected: usize, found: usize },

    #[error("{block}: field `{field}` must be an absolute http(s) URL (got `{value}`)")]
    InvalidUrl {
        block: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("block {index} ({kind}): {source}")]
    AtIndex {
        index: usize,
        kind: &'static str,
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Wraps an error with the position and kind of the block it came from.
    #[must_use]
    pub fn at_index(self, index: usize, kind: &'static str) -> Self {
        Self::AtIndex {
            index,
            kind,
            source: Box::new(self),
        }
    }
}

/// Structural validation, run before a block or body is persisted.
pub trait Validate {
    /// Returns the first constraint violation, if any.
    fn validate(&self) -> crate::Result<()>;
}

/// Checks a required text field for emptiness (whitespace-only counts as empty).
pub(crate) fn require_text(
    block: &'static str,
    field: &'static str,
    value: &str,
) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { block, field });
    }
    Ok(())
}

/// Checks an optional text field against a character ceiling.
pub(crate) fn check_len(
    block: &'static str,
    field: &'static str,
    value: &str,
    max: usize,
) -> crate::Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong {
            block,
            field,
            max,
            len,
        });
    }
    Ok(())
}

/// Checks that a URL field holds an absolute http(s) URL.
pub(crate) fn require_http_url(
    block: &'static str,
    field: &'static str,
    value: &str,
) -> crate::Result<()> {
    require_text(block, field, value)?;
    let lowered = value.trim().to_ascii_lowercase();
    if !(lowered.starts_with("http://") || lowered.starts_with("https://")) {
        return Err(ValidationError::InvalidUrl {
            block,
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
