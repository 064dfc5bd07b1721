//! External media embed block.

use crate::validate::{require_http_url, Validate};
use serde::{Deserialize, Serialize};

/// A single external media URL, e.g. a video to embed.
///
/// Stored as the bare URL string; the embed provider is resolved at render
/// time from the URL itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbedBlock {
    /// Absolute http(s) URL of the media to embed.
    pub url: String,
}

impl EmbedBlock {
    /// Creates an embed from a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Validate for EmbedBlock {
    fn validate(&self) -> crate::Result<()> {
        require_http_url("embed", "url", &self.url)
    }
}
