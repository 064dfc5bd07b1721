//! The root block union and the ordered stream body.

use crate::validate::Validate;
use crate::{
    EmbedBlock, HeadingBlock, HighlightsBlock, ImageBlock, MultiColumnBlock, QuoteBlock, RichText,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The union of blocks a page body may contain.
///
/// The serialized form tags each entry with its variant
/// (`{"type": "heading_block", "value": {...}}`), which is also the key the
/// renderer selects templates by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Block {
    #[serde(rename = "heading_block")]
    Heading(HeadingBlock),
    #[serde(rename = "highlight_block")]
    Highlights(HighlightsBlock),
    #[serde(rename = "paragraph_block")]
    Paragraph(RichText),
    #[serde(rename = "image_block")]
    Image(ImageBlock),
    #[serde(rename = "block_quote")]
    Quote(QuoteBlock),
    #[serde(rename = "embed_block")]
    Embed(EmbedBlock),
    #[serde(rename = "two_column_block")]
    TwoColumn(MultiColumnBlock),
}

impl Block {
    /// The kind tag of this block.
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        match self {
            Self::Heading(_) => BlockKind::Heading,
            Self::Highlights(_) => BlockKind::Highlights,
            Self::Paragraph(_) => BlockKind::Paragraph,
            Self::Image(_) => BlockKind::Image,
            Self::Quote(_) => BlockKind::Quote,
            Self::Embed(_) => BlockKind::Embed,
            Self::TwoColumn(_) => BlockKind::TwoColumn,
        }
    }

    /// Readable text contributed by this block, for search flattening.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Heading(heading) => heading.heading_text.clone(),
            Self::Highlights(highlights) => highlights.highlight_items.join(" "),
            Self::Paragraph(text) => text.plain_text(),
            Self::Image(image) => {
                let mut parts = Vec::new();
                if let Some(caption) = &image.caption {
                    parts.push(caption.as_str());
                }
                if let Some(attribution) = &image.attribution {
                    parts.push(attribution.as_str());
                }
                parts.join(" ")
            }
            Self::Quote(quote) => match &quote.attribution {
                Some(attribution) => format!("{} {}", quote.text, attribution),
                None => quote.text.clone(),
            },
            Self::Embed(_) => String::new(),
            Self::TwoColumn(columns) => columns.plain_text(),
        }
    }
}

impl Validate for Block {
    fn validate(&self) -> crate::Result<()> {
        match self {
            Self::Heading(heading) => heading.validate(),
            Self::Highlights(highlights) => highlights.validate(),
            Self::Paragraph(_) => Ok(()),
            Self::Image(image) => image.validate(),
            Self::Quote(quote) => quote.validate(),
            Self::Embed(embed) => embed.validate(),
            Self::TwoColumn(columns) => columns.validate(),
        }
    }
}

/// Tags identifying every block variant the library ships.
///
/// [`ReferenceBlock`](crate::ReferenceBlock) is part of the library but not of
/// the page-body union, so it appears here without a [`Block`] counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading,
    Highlights,
    Paragraph,
    Image,
    Quote,
    Embed,
    TwoColumn,
    Reference,
}

impl BlockKind {
    /// Every kind, in the order the edit UI offers them.
    pub const ALL: [Self; 8] = [
        Self::Heading,
        Self::Highlights,
        Self::Paragraph,
        Self::Image,
        Self::Quote,
        Self::Embed,
        Self::TwoColumn,
        Self::Reference,
    ];

    /// The wire/type tag. Template selection is keyed by this and nothing else.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Heading => "heading_block",
            Self::Highlights => "highlight_block",
            Self::Paragraph => "paragraph_block",
            Self::Image => "image_block",
            Self::Quote => "block_quote",
            Self::Embed => "embed_block",
            Self::TwoColumn => "two_column_block",
            Self::Reference => "reference_block",
        }
    }

    /// The template each variant renders through. Exactly one per variant.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Heading => "blocks/heading_block.html",
            Self::Highlights => "blocks/highlight_block.html",
            Self::Paragraph => "blocks/paragraph_block.html",
            Self::Image => "blocks/image_block.html",
            Self::Quote => "blocks/quote_block.html",
            Self::Embed => "blocks/embed_block.html",
            Self::TwoColumn => "blocks/two_column_block.html",
            Self::Reference => "blocks/reference_block.html",
        }
    }

    /// Icon hint for the edit UI's block chooser.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Heading => "title",
            Self::Highlights => "list",
            Self::Paragraph => "pilcrow",
            Self::Image => "image",
            Self::Quote => "openquote",
            Self::Embed => "media",
            Self::TwoColumn => "table",
            Self::Reference => "link",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An ordered, heterogeneous sequence of blocks forming a page's content.
///
/// Order is meaningful: blocks render in declaration order, and appending
/// never reorders earlier entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamBody {
    blocks: Vec<Block>,
}

impl StreamBody {
    /// Creates an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block after all existing ones.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// The blocks, in rendering order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks in the body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when the body holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates blocks in rendering order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Flattens the whole body to readable text, in block order.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let parts: Vec<String> = self
            .blocks
            .iter()
            .map(Block::plain_text)
            .filter(|text| !text.is_empty())
            .collect();
        parts.join(" ")
    }
}

impl Validate for StreamBody {
    fn validate(&self) -> crate::Result<()> {
        for (index, block) in self.blocks.iter().enumerate() {
            block
                .validate()
                .map_err(|err| err.at_index(index, block.kind().tag()))?;
        }
        Ok(())
    }
}

impl From<Vec<Block>> for StreamBody {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl FromIterator<Block> for StreamBody {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StreamBody {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
