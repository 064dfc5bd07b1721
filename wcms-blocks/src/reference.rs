//! Reference / attribution block.

use crate::validate::{require_http_url, Validate};
use serde::{Deserialize, Serialize};
use wcms_types::DocumentId;

/// A citation pairing an external URL with a document asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceBlock {
    /// Absolute http(s) URL of the referenced source. Required.
    pub reference: String,
    /// The document asset backing the reference. Required.
    pub document: DocumentId,
}

impl ReferenceBlock {
    /// Creates a reference block.
    #[must_use]
    pub fn new(reference: impl Into<String>, document: DocumentId) -> Self {
        Self {
            reference: reference.into(),
            document,
        }
    }
}

impl Validate for ReferenceBlock {
    fn validate(&self) -> crate::Result<()> {
        require_http_url("reference", "reference", &self.reference)
    }
}
