//! Rich text held as CommonMark source.

use pulldown_cmark::{Event, Parser, TagEnd};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Formatted text stored as CommonMark source.
///
/// The source string is the canonical representation; HTML is derived at
/// render time and plain text at index time, both through the Markdown
/// event stream rather than string munging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    /// Creates rich text from CommonMark source.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Returns the CommonMark source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the source contains no non-whitespace content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Flattens formatting away, leaving the readable text.
    ///
    /// Inline markup contributes its text, block boundaries become single
    /// spaces, and raw HTML contributes nothing.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for event in Parser::new(&self.0) {
            match event {
                Event::Text(text) | Event::Code(text) => out.push_str(&text),
                Event::SoftBreak | Event::HardBreak => out.push(' '),
                // Block boundaries become single spaces; inline ends do not.
                Event::End(
                    TagEnd::Paragraph
                    | TagEnd::Heading(_)
                    | TagEnd::Item
                    | TagEnd::CodeBlock
                    | TagEnd::BlockQuote(_),
                ) => {
                    if !out.ends_with(' ') && !out.is_empty() {
                        out.push(' ');
                    }
                }
                _ => {}
            }
        }
        out.trim().to_string()
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RichText {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for RichText {
    fn from(source: String) -> Self {
        Self(source)
    }
}
