//! Page and snippet models for wcms.
//!
//! Defines the editable content records and the declarations their
//! surrounding machinery consumes:
//! - [`StandardPage`] — a generic page whose body is a stream of blocks
//! - [`FooterText`] / [`HeaderText`] — site-wide content snippets
//! - [`FieldSchema`] — machine-readable edit-form constraints per field
//! - [`FieldPanel`] — which fields the edit UI shows, in order
//! - [`SearchField`] — which fields the indexer includes, and how they match
//!
//! Form intake is serde deserialization followed by [`validate`], so a record
//! that parses but breaks a declared constraint never reaches the store.
//!
//! [`validate`]: StandardPage::validate

mod page;
mod panels;
mod schema;
mod search;
mod snippets;

pub use page::StandardPage;
pub use panels::FieldPanel;
pub use schema::{FieldKind, FieldSchema};
pub use search::SearchField;
pub use snippets::{FooterText, HeaderText, Snippet};

use wcms_blocks::ValidationError;

/// Result type alias for model validation.
pub type Result<T> = std::result::Result<T, ModelError>;

/// A model-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("{model}: field `{field}` is required")]
    MissingField {
        model: &'static str,
        field: &'static str,
    },

    #[error("{model}: slug must be lowercase letters, digits, and hyphens (got `{value}`)")]
    InvalidSlug {
        model: &'static str,
        value: String,
    },

    #[error("{model}: {source}")]
    Body {
        model: &'static str,
        source: ValidationError,
    },
}
