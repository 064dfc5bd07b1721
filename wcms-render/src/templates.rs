//! Block-variant → template mapping.

use wcms_blocks::BlockKind;

/// The template a block variant renders through.
///
/// Selection is keyed by the variant tag only. Every variant has exactly one
/// template and no two variants share one (tests enforce both).
#[must_use]
pub const fn template_for(kind: BlockKind) -> &'static str {
    kind.template()
}
