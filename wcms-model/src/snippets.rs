//! Site-wide content snippets.
//!
//! Snippets are standalone records outside any page tree, edited through
//! their own admin listing. The two here are singletons by convention only:
//! nothing enforces uniqueness, and consumers read the first record.

use crate::{FieldPanel, FieldSchema, ModelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use wcms_blocks::RichText;
use wcms_types::{ImageId, SnippetId};

/// A snippet model the admin UI can list and edit.
pub trait Snippet {
    /// Stable kind tag, used as the admin listing key.
    fn kind() -> &'static str;

    /// Heading shown over the admin listing.
    fn verbose_name_plural() -> &'static str;

    /// The fields the edit UI shows, in order.
    fn panels() -> Vec<FieldPanel>;

    /// The edit-form constraints for this snippet's fields.
    fn schema() -> Vec<FieldSchema>;
}

/// Editable rich text for the site footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterText {
    pub id: SnippetId,
    /// The footer content. Required.
    pub body: RichText,
}

impl FooterText {
    /// Creates a footer-text snippet with a fresh id.
    #[must_use]
    pub fn new(body: impl Into<RichText>) -> Self {
        Self {
            id: SnippetId::new(),
            body: body.into(),
        }
    }

    /// Enforces the declared constraints.
    pub fn validate(&self) -> crate::Result<()> {
        if self.body.is_empty() {
            return Err(ModelError::MissingField {
                model: "footer_text",
                field: "body",
            });
        }
        Ok(())
    }
}

impl Snippet for FooterText {
    fn kind() -> &'static str {
        "footer_text"
    }

    fn verbose_name_plural() -> &'static str {
        "Footer Text"
    }

    fn panels() -> Vec<FieldPanel> {
        vec![FieldPanel::new("body")]
    }

    fn schema() -> Vec<FieldSchema> {
        vec![FieldSchema::rich_text("body")]
    }
}

impl fmt::Display for FooterText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Footer text")
    }
}

/// Optional hero image for the site-wide header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderText {
    pub id: SnippetId,
    /// The header image. Weak reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageId>,
}

impl HeaderText {
    /// Creates a header snippet with a fresh id.
    #[must_use]
    pub fn new(image: Option<ImageId>) -> Self {
        Self {
            id: SnippetId::new(),
            image,
        }
    }

    /// Enforces the declared constraints. The image is optional, so an empty
    /// header is valid.
    pub fn validate(&self) -> crate::Result<()> {
        Ok(())
    }
}

impl Snippet for HeaderText {
    fn kind() -> &'static str {
        "header_text"
    }

    fn verbose_name_plural() -> &'static str {
        "Header Text"
    }

    fn panels() -> Vec<FieldPanel> {
        vec![FieldPanel::new("image")]
    }

    fn schema() -> Vec<FieldSchema> {
        vec![FieldSchema::image_ref("image")
            .optional()
            .help("Landscape mode only; horizontal width between 1000px and 3000px.")]
    }
}

impl fmt::Display for HeaderText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Header text")
    }
}
