use std::fs;

use pretty_assertions::assert_eq;
use wcms_blocks::{Block, HeadingBlock, HeadingSize, QuoteBlock};
use wcms_cli::{render_site, search_site, SiteContent};
use wcms_model::{FooterText, HeaderText, StandardPage};
use wcms_store::Image;

fn sample_site() -> SiteContent {
    let hero = Image::new("Hero", "https://cdn.example.com/hero.jpg");

    let mut welcome = StandardPage::new("Welcome", "welcome");
    welcome.introduction = Some("A friendly greeting page".into());
    welcome.image = Some(hero.id);
    welcome
        .body
        .push(Block::Heading(HeadingBlock::sized("Welcome", HeadingSize::H2)));
    welcome
        .body
        .push(Block::Quote(QuoteBlock::attributed("Hello", "A. Author")));

    let about = StandardPage::new("About us", "about-us");

    SiteContent {
        images: vec![hero],
        documents: Vec::new(),
        pages: vec![welcome, about],
        footer_texts: vec![FooterText::new("All rights reserved.")],
        header_texts: vec![HeaderText::new(None)],
    }
}

// ── Loading and validation ───────────────────────────────────────

#[test]
fn content_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    fs::write(&path, serde_json::to_string_pretty(&sample_site()).unwrap()).unwrap();

    let site = SiteContent::load(&path).unwrap();
    assert_eq!(site.pages.len(), 2);
    assert_eq!(site.images.len(), 1);
    assert!(site.violations().is_empty());
}

#[test]
fn missing_sections_default_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    fs::write(&path, r#"{"pages": []}"#).unwrap();

    let site = SiteContent::load(&path).unwrap();
    assert!(site.pages.is_empty());
    assert!(site.footer_texts.is_empty());
}

#[test]
fn violations_name_the_offending_record() {
    let mut site = sample_site();
    site.pages[1].title = String::new();

    let violations = site.violations();
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("about-us"));
    assert!(violations[0].contains("title"));
}

#[test]
fn invalid_content_never_reaches_the_store() {
    let mut site = sample_site();
    site.pages[0].slug = "Not A Slug".into();
    assert!(site.into_store().is_err());
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn render_writes_one_file_per_page_named_by_slug() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("site");

    let store = sample_site().into_store().unwrap();
    let written = render_site(&store, &out).unwrap();

    assert_eq!(written, 2);
    let welcome = fs::read_to_string(out.join("welcome.html")).unwrap();
    let about = fs::read_to_string(out.join("about-us.html")).unwrap();

    // Body blocks appear in declaration order, wrapped by the snippets.
    let heading_at = welcome.find("<h2>Welcome</h2>").expect("heading missing");
    let quote_at = welcome.find("<blockquote").expect("quote missing");
    assert!(heading_at < quote_at);
    assert!(welcome.contains("<footer>"));
    assert!(welcome.starts_with("<header>"));
    assert!(about.contains("<h1>About us</h1>"));
}

// ── Search ───────────────────────────────────────────────────────

#[test]
fn search_finds_pages_by_partial_body_text() {
    let store = sample_site().into_store().unwrap();

    let hits = search_site(&store, "ello");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Welcome");
    assert_eq!(hits[0].matched_fields, vec!["body"]);

    let hits = search_site(&store, "Welc");
    assert_eq!(hits.len(), 1);
    assert!(hits[0].matched_fields.contains(&"title"));

    assert!(search_site(&store, "zebra").is_empty());
}
