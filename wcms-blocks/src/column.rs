//! Two-column layout block.

use crate::validate::{Validate, ValidationError};
use crate::{EmbedBlock, ImageBlock, QuoteBlock, RichText};
use serde::{Deserialize, Serialize};

/// Number of children a two-column block must hold.
pub const COLUMN_COUNT: usize = 2;

/// The sub-union of blocks allowed inside a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ColumnBlock {
    #[serde(rename = "paragraph_block")]
    Paragraph(RichText),
    #[serde(rename = "image_block")]
    Image(ImageBlock),
    #[serde(rename = "block_quote")]
    Quote(QuoteBlock),
    #[serde(rename = "embed_block")]
    Embed(EmbedBlock),
}

impl ColumnBlock {
    /// The wire tag of this child block.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Paragraph(_) => "paragraph_block",
            Self::Image(_) => "image_block",
            Self::Quote(_) => "block_quote",
            Self::Embed(_) => "embed_block",
        }
    }

    /// Readable text contributed by this child, for search flattening.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
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
        }
    }
}

impl Validate for ColumnBlock {
    fn validate(&self) -> crate::Result<()> {
        match self {
            // Rich text has no structural constraints of its own.
            Self::Paragraph(_) => Ok(()),
            Self::Image(image) => image.validate(),
            Self::Quote(quote) => quote.validate(),
            Self::Embed(embed) => embed.validate(),
        }
    }
}

/// A two-column layout: an ordered pair of column children.
///
/// INVARIANT: exactly [`COLUMN_COUNT`] children. The pair renders left to
/// right in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiColumnBlock {
    pub columns: Vec<ColumnBlock>,
}

impl MultiColumnBlock {
    /// Creates a two-column block from a left and right child.
    #[must_use]
    pub fn pair(left: ColumnBlock, right: ColumnBlock) -> Self {
        Self {
            columns: vec![left, right],
        }
    }

    /// Readable text contributed by both columns, left first.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let parts: Vec<String> = self
            .columns
            .iter()
            .map(ColumnBlock::plain_text)
            .filter(|text| !text.is_empty())
            .collect();
        parts.join(" ")
    }
}

impl Validate for MultiColumnBlock {
    fn validate(&self) -> crate::Result<()> {
        if self.columns.len() != COLUMN_COUNT {
            return Err(ValidationError::ColumnCount {
                expected: COLUMN_COUNT,
                found: self.columns.len(),
            });
        }
        for (index, column) in self.columns.iter().enumerate() {
            column
                .validate()
                .map_err(|err| err.at_index(index, column.tag()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exactly_two_children_required() {
        let one = MultiColumnBlock {
            columns: vec![ColumnBlock::Paragraph(RichText::new("only"))],
        };
        assert_eq!(
            one.validate(),
            Err(ValidationError::ColumnCount {
                expected: 2,
                found: 1,
            })
        );

        let three = MultiColumnBlock {
            columns: vec![
                ColumnBlock::Paragraph(RichText::new("a")),
                ColumnBlock::Paragraph(RichText::new("b")),
                ColumnBlock::Paragraph(RichText::new("c")),
            ],
        };
        assert!(matches!(
            three.validate(),
            Err(ValidationError::ColumnCount { found: 3, .. })
        ));

        let two = MultiColumnBlock::pair(
            ColumnBlock::Paragraph(RichText::new("left")),
            ColumnBlock::Quote(QuoteBlock::new("right")),
        );
        assert!(two.validate().is_ok());
    }

    #[test]
    fn child_violations_carry_position() {
        let block = MultiColumnBlock::pair(
            ColumnBlock::Paragraph(RichText::new("fine")),
            ColumnBlock::Quote(QuoteBlock::new("")),
        );
        let err = block.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::AtIndex {
                index: 1,
                kind: "block_quote",
                ..
            }
        ));
    }

    #[test]
    fn flattens_left_then_right() {
        let block = MultiColumnBlock::pair(
            ColumnBlock::Paragraph(RichText::new("left side")),
            ColumnBlock::Paragraph(RichText::new("right side")),
        );
        assert_eq!(block.plain_text(), "left side right side");
    }
}
