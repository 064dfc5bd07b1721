//! Captioned image block.

use crate::validate::{check_len, Validate, SHORT_TEXT_MAX_CHARS};
use serde::{Deserialize, Serialize};
use wcms_types::ImageId;

/// An image with an optional caption and attribution line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    /// The image asset to show. Required.
    pub image: ImageId,
    /// Title shown under the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Credit line for the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

impl ImageBlock {
    /// Creates an image block with no caption or attribution.
    #[must_use]
    pub fn new(image: ImageId) -> Self {
        Self {
            image,
            caption: None,
            attribution: None,
        }
    }

    /// Sets the caption.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the attribution.
    #[must_use]
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }
}

impl Validate for ImageBlock {
    fn validate(&self) -> crate::Result<()> {
        if let Some(caption) = &self.caption {
            check_len("image", "caption", caption, SHORT_TEXT_MAX_CHARS)?;
        }
        if let Some(attribution) = &self.attribution {
            check_len("image", "attribution", attribution, SHORT_TEXT_MAX_CHARS)?;
        }
        Ok(())
    }
}
