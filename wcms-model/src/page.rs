//! The standard page model.

use crate::{FieldPanel, FieldSchema, ModelError, SearchField};
use serde::{Deserialize, Serialize};
use wcms_blocks::{StreamBody, Validate};
use wcms_types::{ImageId, PageId};

/// A generic page usable as the base for most site content.
///
/// The body is an ordered stream of blocks; everything else is flat fields.
/// Lifecycle (publish, revisions, tree position) belongs to whatever hosts
/// the page. This type only owns shape and constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardPage {
    pub id: PageId,
    /// Page title. Required, owns the `h1`.
    pub title: String,
    /// URL fragment the page renders under. Lowercase letters, digits, hyphens.
    pub slug: String,
    /// Short text describing the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    /// The page content, in rendering order.
    #[serde(default)]
    pub body: StreamBody,
    /// Banner image shown at the top of the page. Weak reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageId>,
    /// Image other pages use when linking to this one. Weak reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<ImageId>,
}

impl StandardPage {
    /// Creates an empty page with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: PageId::new(),
            title: title.into(),
            slug: slug.into(),
            introduction: None,
            body: StreamBody::new(),
            image: None,
            feature_image: None,
        }
    }

    /// Enforces every constraint `schema()` declares, then the body's own.
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::MissingField {
                model: "standard_page",
                field: "title",
            });
        }
        if self.slug.is_empty() {
            return Err(ModelError::MissingField {
                model: "standard_page",
                field: "slug",
            });
        }
        if !self
            .slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ModelError::InvalidSlug {
                model: "standard_page",
                value: self.slug.clone(),
            });
        }
        self.body.validate().map_err(|source| ModelError::Body {
            model: "standard_page",
            source,
        })
    }

    /// The edit-form constraints for this model's fields.
    #[must_use]
    pub fn schema() -> Vec<FieldSchema> {
        vec![
            FieldSchema::short_text("title"),
            FieldSchema::short_text("slug"),
            FieldSchema::long_text("introduction")
                .optional()
                .help("Text to describe the page"),
            FieldSchema::stream("body").optional(),
            FieldSchema::image_ref("image")
                .optional()
                .help("Landscape mode only; horizontal width between 1000px and 3000px."),
            FieldSchema::image_ref("feature_image")
                .optional()
                .help("Landscape mode only; horizontal width between 1000px and 3000px."),
        ]
    }

    /// The fields the edit UI shows, in order.
    #[must_use]
    pub fn content_panels() -> Vec<FieldPanel> {
        vec![
            FieldPanel::new("title"),
            FieldPanel::with_classname("introduction", "full"),
            FieldPanel::new("body"),
            FieldPanel::new("image"),
            FieldPanel::new("feature_image"),
        ]
    }

    /// The fields the search indexer includes. All partial-match.
    #[must_use]
    pub fn search_fields() -> Vec<SearchField> {
        vec![
            SearchField::partial("title"),
            SearchField::partial("introduction"),
            SearchField::partial("body"),
        ]
    }

    /// Flattened text of one declared search field, if it has any.
    ///
    /// The body flattens through the block library, so only readable text
    /// reaches the index.
    #[must_use]
    pub fn search_text(&self, field: &str) -> Option<String> {
        match field {
            "title" => Some(self.title.clone()),
            "introduction" => self.introduction.clone(),
            "body" => Some(self.body.plain_text()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_slug_required() {
        let mut page = StandardPage::new("", "welcome");
        assert!(page.validate().is_err());

        page.title = "Welcome".into();
        assert!(page.validate().is_ok());

        page.slug = String::new();
        assert!(page.validate().is_err());
    }

    #[test]
    fn slug_charset_enforced() {
        let page = StandardPage::new("About", "About Us");
        assert_eq!(
            page.validate(),
            Err(ModelError::InvalidSlug {
                model: "standard_page",
                value: "About Us".into(),
            })
        );
        assert!(StandardPage::new("About", "about-us").validate().is_ok());
    }

    #[test]
    fn panels_cover_all_editable_fields_in_order() {
        let fields: Vec<&str> = StandardPage::content_panels()
            .iter()
            .map(|p| p.field)
            .collect();
        assert_eq!(
            fields,
            vec!["title", "introduction", "body", "image", "feature_image"]
        );
    }

    #[test]
    fn search_fields_are_all_partial() {
        let fields = StandardPage::search_fields();
        assert_eq!(fields.len(), 3);
        assert!(fields.iter().all(|f| f.partial_match));
    }

    #[test]
    fn every_search_field_has_a_text_source() {
        let page = StandardPage::new("Welcome", "welcome");
        for field in StandardPage::search_fields() {
            // `introduction` is None on a fresh page, which is fine; the
            // field name itself must at least be known.
            if field.field != "introduction" {
                assert!(page.search_text(field.field).is_some(), "{}", field.field);
            }
        }
        assert!(page.search_text("nonexistent").is_none());
    }
}
