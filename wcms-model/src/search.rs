//! Search-field declarations.

use serde::Serialize;

/// Declares that one model field feeds the search index.
///
/// `partial_match` fields match on substrings of their text; the rest match
/// whole tokens only. The indexer reads these declarations and nothing else,
/// so adding a field here is all it takes to make it findable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchField {
    /// The model field to index.
    pub field: &'static str,
    /// Whether substring queries match this field.
    pub partial_match: bool,
}

impl SearchField {
    /// A field matched on substrings.
    #[must_use]
    pub const fn partial(field: &'static str) -> Self {
        Self {
            field,
            partial_match: true,
        }
    }

    /// A field matched on whole tokens.
    #[must_use]
    pub const fn exact(field: &'static str) -> Self {
        Self {
            field,
            partial_match: false,
        }
    }
}
