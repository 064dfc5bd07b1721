//! Core type definitions for wcms.
//!
//! This crate defines the fundamental, model-agnostic types used throughout
//! the content engine:
//! - Page, snippet, and media-asset identifiers (UUID v7)
//! - The shared error type for id and serialization failures
//!
//! Content shapes (blocks, pages, snippets) belong to `wcms-blocks` and
//! `wcms-model`, not here.

mod ids;

pub use ids::{DocumentId, ImageId, PageId, SnippetId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
