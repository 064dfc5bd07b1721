use pretty_assertions::assert_eq;
use wcms_blocks::{Block, HeadingBlock, HeadingSize, QuoteBlock};
use wcms_model::{FieldKind, FooterText, HeaderText, ModelError, Snippet, StandardPage};
use wcms_types::ImageId;

fn welcome_page() -> StandardPage {
    let mut page = StandardPage::new("Welcome", "welcome");
    page.introduction = Some("A friendly greeting page".into());
    page.body
        .push(Block::Heading(HeadingBlock::sized("Welcome", HeadingSize::H2)));
    page.body
        .push(Block::Quote(QuoteBlock::attributed("Hello", "A. Author")));
    page
}

// ── Schema ↔ validation agreement ────────────────────────────────

#[test]
fn schema_declares_what_validate_enforces() {
    let schema = StandardPage::schema();

    let title = schema.iter().find(|f| f.name == "title").unwrap();
    assert!(title.required);
    let mut page = welcome_page();
    page.title = String::new();
    assert!(page.validate().is_err());

    let intro = schema.iter().find(|f| f.name == "introduction").unwrap();
    assert!(!intro.required);
    let mut page = welcome_page();
    page.introduction = None;
    assert!(page.validate().is_ok());
}

#[test]
fn schema_marks_asset_fields_as_weak_image_refs() {
    let schema = StandardPage::schema();
    for name in ["image", "feature_image"] {
        let field = schema.iter().find(|f| f.name == name).unwrap();
        assert_eq!(field.kind, FieldKind::ImageRef);
        assert!(!field.required);
    }
}

// ── Form intake: deserialize then validate ───────────────────────

#[test]
fn valid_submission_parses_and_validates() {
    let image = ImageId::new();
    let payload = format!(
        r#"{{
            "id": "{}",
            "title": "About us",
            "slug": "about-us",
            "introduction": "Who we are",
            "body": [
                {{"type": "heading_block", "value": {{"heading_text": "Our story"}}}},
                {{"type": "image_block", "value": {{"image": "{image}", "caption": "The team"}}}}
            ],
            "image": "{image}"
        }}"#,
        wcms_types::PageId::new(),
    );

    let page: StandardPage = serde_json::from_str(&payload).unwrap();
    assert!(page.validate().is_ok());
    assert_eq!(page.image, Some(image));
    assert_eq!(page.feature_image, None);
    assert_eq!(page.body.len(), 2);
}

#[test]
fn submission_breaking_a_block_invariant_is_rejected() {
    let payload = format!(
        r#"{{
            "id": "{}",
            "title": "Broken",
            "slug": "broken",
            "body": [
                {{"type": "two_column_block", "value": [
                    {{"type": "paragraph_block", "value": "only one column"}}
                ]}}
            ]
        }}"#,
        wcms_types::PageId::new(),
    );

    let page: StandardPage = serde_json::from_str(&payload).unwrap();
    assert!(matches!(
        page.validate(),
        Err(ModelError::Body {
            model: "standard_page",
            ..
        })
    ));
}

// ── Search declarations ──────────────────────────────────────────

#[test]
fn body_search_text_flattens_blocks_in_order() {
    let page = welcome_page();
    assert_eq!(
        page.search_text("body").unwrap(),
        "Welcome Hello A. Author"
    );
}

#[test]
fn declared_search_fields_match_the_model() {
    let names: Vec<&str> = StandardPage::search_fields()
        .iter()
        .map(|f| f.field)
        .collect();
    assert_eq!(names, vec!["title", "introduction", "body"]);
}

// ── Snippets ─────────────────────────────────────────────────────

#[test]
fn snippet_panels_name_their_single_field() {
    assert_eq!(FooterText::panels()[0].field, "body");
    assert_eq!(HeaderText::panels()[0].field, "image");
}

#[test]
fn snippets_round_trip_through_json() {
    let footer = FooterText::new("All rights reserved.");
    let json = serde_json::to_string(&footer).unwrap();
    let back: FooterText = serde_json::from_str(&json).unwrap();
    assert_eq!(back, footer);

    let header = HeaderText::new(Some(ImageId::new()));
    let json = serde_json::to_string(&header).unwrap();
    let back: HeaderText = serde_json::from_str(&json).unwrap();
    assert_eq!(back, header);
}
