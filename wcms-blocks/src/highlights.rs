//! Highlights / key-points block.

use crate::validate::{check_len, Validate, ValidationError};
use serde::{Deserialize, Serialize};

/// Ceiling for a single highlight item.
pub const HIGHLIGHT_ITEM_MAX_CHARS: usize = 512;

/// An ordered list of short takeaway lines, shown in a chosen emphasis style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightsBlock {
    /// Emphasis applied to every item. Required.
    pub format: HighlightFormat,
    /// The highlight lines, in display order. Must not be empty.
    pub highlight_items: Vec<String>,
}

impl HighlightsBlock {
    /// Creates a highlights block from items.
    #[must_use]
    pub fn new(format: HighlightFormat, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            format,
            highlight_items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for HighlightsBlock {
    fn validate(&self) -> crate::Result<()> {
        if self.highlight_items.is_empty() {
            return Err(ValidationError::EmptyList {
                block: "highlights",
                field: "highlight_items",
            });
        }
        for item in &self.highlight_items {
            check_len(
                "highlights",
                "highlight_items",
                item,
                HIGHLIGHT_ITEM_MAX_CHARS,
            )?;
        }
        Ok(())
    }
}

/// Emphasis styles an editor may pick for highlight items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightFormat {
    Normal,
    Italic,
    Bold,
    BoldItalic,
}

impl HighlightFormat {
    /// CSS class emitted by the renderer for this format.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Normal => "highlight-normal",
            Self::Italic => "highlight-italic",
            Self::Bold => "highlight-bold",
            Self::BoldItalic => "highlight-bold-italic",
        }
    }
}
