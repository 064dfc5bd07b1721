use pretty_assertions::assert_eq;
use wcms_blocks::{AssetResolver, Block, ImageBlock, QuoteBlock};
use wcms_model::{FooterText, HeaderText, StandardPage};
use wcms_store::{ContentStore, Image, StoreError};
use wcms_types::ImageId;

// ── Write validation ─────────────────────────────────────────────

#[test]
fn invalid_page_is_never_stored() {
    let mut store = ContentStore::new();
    let page = StandardPage::new("", "no-title");
    let err = store.add_page(page).unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
    assert!(store.pages().is_empty());
}

#[test]
fn add_page_is_an_upsert() {
    let mut store = ContentStore::new();
    let mut page = StandardPage::new("Welcome", "welcome");
    let id = store.add_page(page.clone()).unwrap();

    page.title = "Welcome back".into();
    store.add_page(page).unwrap();

    assert_eq!(store.pages().len(), 1);
    assert_eq!(store.page(id).unwrap().title, "Welcome back");
}

// ── Weak reference semantics ─────────────────────────────────────

#[test]
fn deleting_an_image_nulls_page_references_but_keeps_the_page() {
    let mut store = ContentStore::new();
    let hero = store.add_image(Image::new("Hero", "https://cdn.example.com/hero.jpg"));
    let teaser = store.add_image(Image::new("Teaser", "https://cdn.example.com/teaser.jpg"));

    let mut page = StandardPage::new("Welcome", "welcome");
    page.image = Some(hero);
    page.feature_image = Some(teaser);
    let page_id = store.add_page(page).unwrap();

    store.remove_image(hero).unwrap();

    let page = store.page(page_id).expect("page must survive asset deletion");
    assert_eq!(page.image, None);
    assert_eq!(page.feature_image, Some(teaser));
}

#[test]
fn deleting_an_image_nulls_header_snippet_references() {
    let mut store = ContentStore::new();
    let banner = store.add_image(Image::new("Banner", "https://cdn.example.com/banner.jpg"));
    store.add_header_text(HeaderText::new(Some(banner))).unwrap();

    store.remove_image(banner).unwrap();

    assert_eq!(store.header_text().unwrap().image, None);
}

#[test]
fn deleting_a_missing_asset_reports_not_found() {
    let mut store = ContentStore::new();
    assert!(matches!(
        store.remove_image(ImageId::new()),
        Err(StoreError::NotFound { kind: "image", .. })
    ));
}

// ── Resolver surface ─────────────────────────────────────────────

#[test]
fn resolver_returns_none_for_deleted_assets() {
    let mut store = ContentStore::new();
    let id = store.add_image(Image::new("Cat", "https://cdn.example.com/cat.jpg"));
    assert_eq!(
        store.image_url(id).as_deref(),
        Some("https://cdn.example.com/cat.jpg")
    );

    store.remove_image(id).unwrap();
    assert_eq!(store.image_url(id), None);
}

#[test]
fn block_level_references_survive_asset_deletion_unchanged() {
    // Required block fields cannot be nulled; the renderer resolves them
    // to nothing instead. The stored body must keep its shape.
    let mut store = ContentStore::new();
    let id = store.add_image(Image::new("Inline", "https://cdn.example.com/inline.jpg"));

    let mut page = StandardPage::new("Gallery", "gallery");
    page.body.push(Block::Image(ImageBlock::new(id)));
    page.body.push(Block::Quote(QuoteBlock::new("After the image")));
    let page_id = store.add_page(page).unwrap();

    store.remove_image(id).unwrap();

    let body = store.page(page_id).unwrap().body.blocks();
    assert_eq!(body.len(), 2);
    assert!(matches!(&body[0], Block::Image(b) if b.image == id));
}

// ── Snippets are singletons by convention only ───────────────────

#[test]
fn first_footer_text_wins_but_more_are_allowed() {
    let mut store = ContentStore::new();
    store.add_footer_text(FooterText::new("First footer")).unwrap();
    store.add_footer_text(FooterText::new("Second footer")).unwrap();

    assert_eq!(store.footer_text().unwrap().body.as_str(), "First footer");
}
