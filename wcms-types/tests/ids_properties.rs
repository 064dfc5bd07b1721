//! Property-based tests for identifier round-trips.

use proptest::prelude::*;
use uuid::Uuid;
use wcms_types::{DocumentId, ImageId, PageId, SnippetId};

fn uuid_strategy() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

proptest! {
    /// Display then parse is the identity, for every id type.
    #[test]
    fn display_parse_round_trips(raw in uuid_strategy()) {
        let page = PageId::from_uuid(raw);
        prop_assert_eq!(PageId::parse(&page.to_string()).unwrap(), page);

        let snippet = SnippetId::from_uuid(raw);
        prop_assert_eq!(SnippetId::parse(&snippet.to_string()).unwrap(), snippet);

        let image = ImageId::from_uuid(raw);
        prop_assert_eq!(ImageId::parse(&image.to_string()).unwrap(), image);

        let document = DocumentId::from_uuid(raw);
        prop_assert_eq!(DocumentId::parse(&document.to_string()).unwrap(), document);
    }

    /// Ids serialize as their canonical UUID string.
    #[test]
    fn serde_matches_display(raw in uuid_strategy()) {
        let id = PageId::from_uuid(raw);
        let json = serde_json::to_string(&id).unwrap();
        prop_assert_eq!(json, format!("\"{id}\""));
    }
}
