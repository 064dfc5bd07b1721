//! Search index for wcms pages.
//!
//! The index is driven entirely by each model's search-field declarations:
//! it stores the flattened text of every declared field and matches queries
//! against that text, substring-wise for `partial_match` fields and
//! whole-token-wise otherwise. Adding a field to a model's declarations is
//! all it takes to make it findable; the index has no model knowledge of
//! its own.

use tracing::debug;
use wcms_model::StandardPage;
use wcms_types::PageId;

/// One field's indexed text for one page.
#[derive(Debug, Clone)]
struct IndexedText {
    field: &'static str,
    /// Normalized (lowercased) flattened text.
    text: String,
    partial_match: bool,
}

/// All indexed fields for one page.
#[derive(Debug, Clone)]
struct Entry {
    page: PageId,
    fields: Vec<IndexedText>,
}

/// An in-memory index over pages' declared search fields.
///
/// Results rank by the number of fields a query matches, ties resolved by
/// insertion order. Re-inserting a page replaces its entry in place.
#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: Vec<Entry>,
}

impl SearchIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes a page, replacing any existing entry for the same id.
    pub fn insert(&mut self, page: &StandardPage) {
        let fields = StandardPage::search_fields()
            .into_iter()
            .filter_map(|declared| {
                page.search_text(declared.field).map(|text| IndexedText {
                    field: declared.field,
                    text: text.to_lowercase(),
                    partial_match: declared.partial_match,
                })
            })
            .collect();

        let entry = Entry {
            page: page.id,
            fields,
        };
        match self.entries.iter_mut().find(|e| e.page == page.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        debug!(id = %page.id, "indexed page");
    }

    /// Drops a page from the index. Returns whether it was present.
    pub fn remove(&mut self, id: PageId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.page != id);
        before != self.entries.len()
    }

    /// Number of indexed pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds pages matching the query, best match first.
    ///
    /// Matching is case-insensitive. Partial-match fields match when they
    /// contain the query as a substring; exact fields only when one of
    /// their whitespace tokens equals the whole query. Empty queries match
    /// nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<PageId> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(usize, PageId)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let matched = entry
                    .fields
                    .iter()
                    .filter(|f| field_matches(f, &query))
                    .count();
                (matched > 0).then_some((matched, entry.page))
            })
            .collect();

        // Stable sort: ties keep insertion order.
        hits.sort_by(|a, b| b.0.cmp(&a.0));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    /// Names the fields of one page that a query matches, in declaration
    /// order. Useful for explaining results in listings.
    #[must_use]
    pub fn matching_fields(&self, id: PageId, query: &str) -> Vec<&'static str> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .find(|e| e.page == id)
            .map(|entry| {
                entry
                    .fields
                    .iter()
                    .filter(|f| field_matches(f, &query))
                    .map(|f| f.field)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn field_matches(field: &IndexedText, query: &str) -> bool {
    if field.partial_match {
        field.text.contains(query)
    } else {
        field.text.split_whitespace().any(|token| token == query)
    }
}
