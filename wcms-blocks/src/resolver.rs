//! Asset resolution seam.

use wcms_types::{DocumentId, ImageId};

/// Resolves weak asset references to servable URLs.
///
/// Blocks and models hold asset *ids*, never the assets themselves. Whoever
/// owns the media library (normally `wcms-store`) implements this so the
/// renderer can turn ids into `src`/`href` values. A `None` means the asset
/// has been deleted since the reference was stored; callers render nothing
/// for it rather than a dangling link.
pub trait AssetResolver {
    /// URL of an image asset, or `None` if it no longer exists.
    fn image_url(&self, id: ImageId) -> Option<String>;

    /// URL of a document asset, or `None` if it no longer exists.
    fn document_url(&self, id: DocumentId) -> Option<String>;
}
