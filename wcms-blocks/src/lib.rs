//! Reusable content block library for wcms.
//!
//! Defines the typed content units that make up a page body:
//! - [`Block`] — the root union every stream body is composed of
//! - [`StreamBody`] — an ordered, heterogeneous sequence of blocks
//! - [`Validate`] — structural validation every block enforces before save
//! - [`BlockKind`] — per-variant metadata (wire tag, template name, admin icon)
//! - [`AssetResolver`] — the seam through which blocks resolve media ids
//!
//! Blocks are plain serde data. The stored representation of a body is an
//! ordered JSON array of `{"type": ..., "value": ...}` objects, so content
//! survives round-trips byte-for-byte regardless of which variants it uses.

mod column;
mod embed;
mod heading;
mod highlights;
mod image;
mod quote;
mod reference;
mod resolver;
mod rich_text;
mod stream;
mod validate;

pub use column::{ColumnBlock, MultiColumnBlock, COLUMN_COUNT};
pub use embed::EmbedBlock;
pub use heading::{HeadingBlock, HeadingSize};
pub use highlights::{HighlightFormat, HighlightsBlock, HIGHLIGHT_ITEM_MAX_CHARS};
pub use image::ImageBlock;
pub use quote::QuoteBlock;
pub use reference::ReferenceBlock;
pub use resolver::AssetResolver;
pub use rich_text::RichText;
pub use stream::{Block, BlockKind, StreamBody};
pub use validate::{Validate, ValidationError, SHORT_TEXT_MAX_CHARS};

/// Result type alias for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
