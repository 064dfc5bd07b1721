//! Machine-readable edit-form constraints.
//!
//! A model's `schema()` declares, per editable field, exactly what the edit
//! surface must enforce at submit time: requiredness, length ceilings, and
//! choice sets. `validate()` on the model enforces the same constraints,
//! and tests compare the two so they cannot drift apart silently.

use serde::Serialize;

/// The data type of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text.
    ShortText,
    /// Multi-line free text.
    LongText,
    /// Formatted rich text.
    RichText,
    /// An ordered stream of blocks.
    Stream,
    /// Weak reference to an image asset.
    ImageRef,
    /// Weak reference to a document asset.
    DocumentRef,
}

/// Declared constraints for one editable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<&'static str>,
}

impl FieldSchema {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            max_length: None,
            choices: None,
            help_text: None,
        }
    }

    /// Shorthand for a single-line text field.
    #[must_use]
    pub const fn short_text(name: &'static str) -> Self {
        Self::new(name, FieldKind::ShortText)
    }

    /// Shorthand for a multi-line text field.
    #[must_use]
    pub const fn long_text(name: &'static str) -> Self {
        Self::new(name, FieldKind::LongText)
    }

    /// Shorthand for a rich-text field.
    #[must_use]
    pub const fn rich_text(name: &'static str) -> Self {
        Self::new(name, FieldKind::RichText)
    }

    /// Shorthand for a stream-of-blocks field.
    #[must_use]
    pub const fn stream(name: &'static str) -> Self {
        Self::new(name, FieldKind::Stream)
    }

    /// Shorthand for a weak image reference.
    #[must_use]
    pub const fn image_ref(name: &'static str) -> Self {
        Self::new(name, FieldKind::ImageRef)
    }

    /// Shorthand for a weak document reference.
    #[must_use]
    pub const fn document_ref(name: &'static str) -> Self {
        Self::new(name, FieldKind::DocumentRef)
    }

    /// Marks the field as optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets a character ceiling.
    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Restricts the field to a fixed choice set.
    #[must_use]
    pub const fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = Some(choices);
        self
    }

    /// Sets the help text shown next to the input.
    #[must_use]
    pub const fn help(mut self, text: &'static str) -> Self {
        self.help_text = Some(text);
        self
    }
}
