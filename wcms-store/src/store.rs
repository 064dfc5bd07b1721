//! The in-memory content store.

use crate::{Document, Image, StoreError, StoreResult};
use tracing::{debug, info};
use wcms_blocks::AssetResolver;
use wcms_model::{FooterText, HeaderText, StandardPage};
use wcms_types::{DocumentId, ImageId, PageId, SnippetId};

/// Holds pages, snippets, and media assets, preserving insertion order.
///
/// Writes are upserts keyed by id; every write validates before storing.
#[derive(Debug, Default)]
pub struct ContentStore {
    pages: Vec<StandardPage>,
    images: Vec<Image>,
    documents: Vec<Document>,
    footer_texts: Vec<FooterText>,
    header_texts: Vec<HeaderText>,
}

impl ContentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Pages ────────────────────────────────────────────────────

    /// Validates and stores a page, replacing any page with the same id.
    pub fn add_page(&mut self, page: StandardPage) -> StoreResult<PageId> {
        page.validate()?;
        let id = page.id;
        match self.pages.iter_mut().find(|p| p.id == id) {
            Some(existing) => *existing = page,
            None => self.pages.push(page),
        }
        debug!(%id, "stored page");
        Ok(id)
    }

    /// Looks up a page by id.
    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&StandardPage> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// All pages, in insertion order.
    #[must_use]
    pub fn pages(&self) -> &[StandardPage] {
        &self.pages
    }

    /// Removes a page.
    pub fn remove_page(&mut self, id: PageId) -> StoreResult<()> {
        let before = self.pages.len();
        self.pages.retain(|p| p.id != id);
        if self.pages.len() == before {
            return Err(StoreError::NotFound {
                kind: "page",
                id: id.to_string(),
            });
        }
        debug!(%id, "removed page");
        Ok(())
    }

    // ── Images ───────────────────────────────────────────────────

    /// Stores an image asset, replacing any asset with the same id.
    pub fn add_image(&mut self, image: Image) -> ImageId {
        let id = image.id;
        match self.images.iter_mut().find(|i| i.id == id) {
            Some(existing) => *existing = image,
            None => self.images.push(image),
        }
        debug!(%id, "stored image asset");
        id
    }

    /// Looks up an image asset by id.
    #[must_use]
    pub fn image(&self, id: ImageId) -> Option<&Image> {
        self.images.iter().find(|i| i.id == id)
    }

    /// Deletes an image asset and nulls every nullable reference to it.
    ///
    /// Referencing pages and snippets are never deleted; their `image` /
    /// `feature_image` fields just become empty.
    pub fn remove_image(&mut self, id: ImageId) -> StoreResult<()> {
        let before = self.images.len();
        self.images.retain(|i| i.id != id);
        if self.images.len() == before {
            return Err(StoreError::NotFound {
                kind: "image",
                id: id.to_string(),
            });
        }

        let mut cleared = 0usize;
        for page in &mut self.pages {
            if page.image == Some(id) {
                page.image = None;
                cleared += 1;
            }
            if page.feature_image == Some(id) {
                page.feature_image = None;
                cleared += 1;
            }
        }
        for header in &mut self.header_texts {
            if header.image == Some(id) {
                header.image = None;
                cleared += 1;
            }
        }
        info!(%id, cleared, "removed image asset");
        Ok(())
    }

    // ── Documents ────────────────────────────────────────────────

    /// Stores a document asset, replacing any asset with the same id.
    pub fn add_document(&mut self, document: Document) -> DocumentId {
        let id = document.id;
        match self.documents.iter_mut().find(|d| d.id == id) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
        debug!(%id, "stored document asset");
        id
    }

    /// Looks up a document asset by id.
    #[must_use]
    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Deletes a document asset. Block-level references to it resolve to
    /// nothing at render time.
    pub fn remove_document(&mut self, id: DocumentId) -> StoreResult<()> {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        if self.documents.len() == before {
            return Err(StoreError::NotFound {
                kind: "document",
                id: id.to_string(),
            });
        }
        info!(%id, "removed document asset");
        Ok(())
    }

    // ── Snippets ─────────────────────────────────────────────────

    /// Validates and stores a footer-text snippet.
    pub fn add_footer_text(&mut self, footer: FooterText) -> StoreResult<SnippetId> {
        footer.validate()?;
        let id = footer.id;
        match self.footer_texts.iter_mut().find(|f| f.id == id) {
            Some(existing) => *existing = footer,
            None => self.footer_texts.push(footer),
        }
        debug!(%id, "stored footer text");
        Ok(id)
    }

    /// The footer text consumers should show. Singleton by convention:
    /// the first stored record wins.
    #[must_use]
    pub fn footer_text(&self) -> Option<&FooterText> {
        self.footer_texts.first()
    }

    /// Validates and stores a header snippet.
    pub fn add_header_text(&mut self, header: HeaderText) -> StoreResult<SnippetId> {
        header.validate()?;
        let id = header.id;
        match self.header_texts.iter_mut().find(|h| h.id == id) {
            Some(existing) => *existing = header,
            None => self.header_texts.push(header),
        }
        debug!(%id, "stored header text");
        Ok(id)
    }

    /// The header snippet consumers should show. First stored record wins.
    #[must_use]
    pub fn header_text(&self) -> Option<&HeaderText> {
        self.header_texts.first()
    }
}

impl AssetResolver for ContentStore {
    fn image_url(&self, id: ImageId) -> Option<String> {
        self.image(id).map(|image| image.file.clone())
    }

    fn document_url(&self, id: DocumentId) -> Option<String> {
        self.document(id).map(|document| document.file.clone())
    }
}
