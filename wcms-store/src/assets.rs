//! Media asset records.

use serde::{Deserialize, Serialize};
use wcms_types::{DocumentId, ImageId};

/// An image asset managed by the media library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    /// Display title, shown in choosers and as fallback alt text.
    pub title: String,
    /// Servable URL of the image file.
    pub file: String,
}

impl Image {
    /// Creates an image asset with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: ImageId::new(),
            title: title.into(),
            file: file.into(),
        }
    }
}

/// A document asset managed by the media library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    /// Display title, shown in choosers and reference listings.
    pub title: String,
    /// Servable URL of the document file.
    pub file: String,
}

impl Document {
    /// Creates a document asset with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            title: title.into(),
            file: file.into(),
        }
    }
}
