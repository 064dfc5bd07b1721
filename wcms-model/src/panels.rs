//! Edit-UI panel declarations.

use serde::Serialize;

/// Declares that the edit UI shows an input for one model field.
///
/// A model's `content_panels()` is the ordered list of these; the edit
/// surface renders them top to bottom and must not invent or omit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldPanel {
    /// The model field this panel edits.
    pub field: &'static str,
    /// Optional presentation hint, e.g. `full` for a full-width input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classname: Option<&'static str>,
}

impl FieldPanel {
    /// Panel with default presentation.
    #[must_use]
    pub const fn new(field: &'static str) -> Self {
        Self {
            field,
            classname: None,
        }
    }

    /// Panel with a presentation hint.
    #[must_use]
    pub const fn with_classname(field: &'static str, classname: &'static str) -> Self {
        Self {
            field,
            classname: Some(classname),
        }
    }
}
