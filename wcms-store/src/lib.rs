//! Content and media store for wcms.
//!
//! Owns the editable records (pages, snippets) and the media assets their
//! fields weakly reference. Two rules hold everywhere:
//!
//! - nothing invalid is stored: every write validates first;
//! - asset references never dangle at the model level: deleting an asset
//!   nulls each nullable reference to it, and the referencing records
//!   survive untouched.
//!
//! Block-level references are required fields and cannot be nulled; they are
//! resolved through [`AssetResolver`](wcms_blocks::AssetResolver) at render
//! time instead, where a missing asset renders as nothing.

mod assets;
mod store;

pub use assets::{Document, Image};
pub use store::ContentStore;

use wcms_model::ModelError;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record broke a declared constraint and was not stored.
    #[error("validation failed: {0}")]
    Invalid(#[from] ModelError),

    /// No record with the given id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}
