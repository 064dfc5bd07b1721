//! Attributed quotation block.

use crate::validate::{check_len, require_text, Validate, SHORT_TEXT_MAX_CHARS};
use serde::{Deserialize, Serialize};

/// A pull quote, optionally attributed to its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBlock {
    /// The quoted text. Required.
    pub text: String,
    /// Who said it, e.g. "John Doe".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

impl QuoteBlock {
    /// Creates an unattributed quote.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attribution: None,
        }
    }

    /// Creates an attributed quote.
    #[must_use]
    pub fn attributed(text: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attribution: Some(attribution.into()),
        }
    }
}

impl Validate for QuoteBlock {
    fn validate(&self) -> crate::Result<()> {
        require_text("quote", "text", &self.text)?;
        if let Some(attribution) = &self.attribution {
            check_len("quote", "attribution", attribution, SHORT_TEXT_MAX_CHARS)?;
        }
        Ok(())
    }
}
