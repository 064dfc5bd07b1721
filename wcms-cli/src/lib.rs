//! Site content file handling for the wcms CLI.
//!
//! A site content file is one JSON document holding the assets, pages, and
//! snippets of a site. The CLI loads it, validates it through the store,
//! and either renders every page to disk or queries the search index.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use wcms_model::{FooterText, HeaderText, StandardPage};
use wcms_render::Renderer;
use wcms_search::SearchIndex;
use wcms_store::{ContentStore, Document, Image};

/// Everything a site content file may hold. All sections are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub pages: Vec<StandardPage>,
    #[serde(default)]
    pub footer_texts: Vec<FooterText>,
    #[serde(default)]
    pub header_texts: Vec<HeaderText>,
}

impl SiteContent {
    /// Loads and parses a site content file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading content file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing content file {}", path.display()))
    }

    /// Collects every constraint violation in the file, one line per record.
    ///
    /// Assets have no constraints of their own, so only pages and snippets
    /// are checked. An empty result means the file is storable as-is.
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        for page in &self.pages {
            if let Err(err) = page.validate() {
                out.push(format!("page `{}`: {err}", page.slug));
            }
        }
        for footer in &self.footer_texts {
            if let Err(err) = footer.validate() {
                out.push(format!("footer text {}: {err}", footer.id));
            }
        }
        for header in &self.header_texts {
            if let Err(err) = header.validate() {
                out.push(format!("header text {}: {err}", header.id));
            }
        }
        out
    }

    /// Moves the content into a store. Assets go in first so pages and
    /// snippets can reference them; every record validates on the way in.
    pub fn into_store(self) -> Result<ContentStore> {
        let mut store = ContentStore::new();
        for image in self.images {
            store.add_image(image);
        }
        for document in self.documents {
            store.add_document(document);
        }
        for page in self.pages {
            let slug = page.slug.clone();
            store
                .add_page(page)
                .with_context(|| format!("storing page `{slug}`"))?;
        }
        for footer in self.footer_texts {
            store.add_footer_text(footer).context("storing footer text")?;
        }
        for header in self.header_texts {
            store.add_header_text(header).context("storing header text")?;
        }
        Ok(store)
    }
}

/// Renders every page in the store to `<out_dir>/<slug>.html`.
///
/// The site header and footer snippets, when present, wrap each page.
/// Returns the number of files written.
pub fn render_site(store: &ContentStore, out_dir: &Path) -> Result<usize> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let renderer = Renderer::new(store);
    let header = store.header_text().map(|h| renderer.render_header(h));
    let footer = store.footer_text().map(|f| renderer.render_footer(f));

    let mut written = 0;
    for page in store.pages() {
        let mut html = String::new();
        if let Some(header) = &header {
            html.push_str(header);
            html.push('\n');
        }
        html.push_str(&renderer.render_page(page));
        if let Some(footer) = &footer {
            html.push_str(footer);
            html.push('\n');
        }

        let path = out_dir.join(format!("{}.html", page.slug));
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
        info!(slug = %page.slug, "rendered page");
        written += 1;
    }
    Ok(written)
}

/// A search hit: the page's title plus the fields the query matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub matched_fields: Vec<&'static str>,
}

/// Indexes every page in the store and runs one query.
#[must_use]
pub fn search_site(store: &ContentStore, query: &str) -> Vec<SearchHit> {
    let mut index = SearchIndex::new();
    for page in store.pages() {
        index.insert(page);
    }

    index
        .search(query)
        .into_iter()
        .filter_map(|id| store.page(id))
        .map(|page| SearchHit {
            title: page.title.clone(),
            matched_fields: index.matching_fields(page.id, query),
        })
        .collect()
}
