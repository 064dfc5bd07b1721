//! Section heading block.

use crate::validate::{require_text, Validate};
use serde::{Deserialize, Serialize};

/// A section heading with a selectable size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingBlock {
    /// The heading text. Required.
    pub heading_text: String,
    /// Heading size. Rendering falls back to `h2` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_size: Option<HeadingSize>,
}

impl HeadingBlock {
    /// Creates a heading with no explicit size.
    #[must_use]
    pub fn new(heading_text: impl Into<String>) -> Self {
        Self {
            heading_text: heading_text.into(),
            heading_size: None,
        }
    }

    /// Creates a heading with an explicit size.
    #[must_use]
    pub fn sized(heading_text: impl Into<String>, size: HeadingSize) -> Self {
        Self {
            heading_text: heading_text.into(),
            heading_size: Some(size),
        }
    }
}

impl Validate for HeadingBlock {
    fn validate(&self) -> crate::Result<()> {
        require_text("heading", "heading_text", &self.heading_text)
    }
}

/// The heading sizes an editor may choose from.
///
/// `h1` is deliberately absent: the page title owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingSize {
    H2,
    H3,
    H4,
}

impl HeadingSize {
    /// The HTML element name for this size.
    #[must_use]
    pub const fn element(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&HeadingSize::H3).unwrap(), "\"h3\"");
    }

    #[test]
    fn empty_heading_is_rejected() {
        assert!(HeadingBlock::new("").validate().is_err());
        assert!(HeadingBlock::new("Welcome").validate().is_ok());
    }

    #[test]
    fn absent_size_is_omitted_from_json() {
        let json = serde_json::to_string(&HeadingBlock::new("Hi")).unwrap();
        assert_eq!(json, r#"{"heading_text":"Hi"}"#);
    }
}
