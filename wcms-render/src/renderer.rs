//! The block and page renderer.

use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{html, Parser};
use wcms_blocks::{
    AssetResolver, Block, ColumnBlock, EmbedBlock, HeadingBlock, HeadingSize, HighlightsBlock,
    ImageBlock, QuoteBlock, ReferenceBlock, RichText, StreamBody,
};
use wcms_model::{FooterText, HeaderText, StandardPage};

/// Renders blocks, bodies, and pages to HTML fragments.
///
/// Holds the asset resolver for the duration of a render pass. Fragments are
/// emitted strictly in declaration order; a block whose required asset no
/// longer resolves contributes nothing.
pub struct Renderer<'a> {
    assets: &'a dyn AssetResolver,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer over an asset resolver.
    #[must_use]
    pub fn new(assets: &'a dyn AssetResolver) -> Self {
        Self { assets }
    }

    /// Renders one block to its fragment.
    #[must_use]
    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Heading(heading) => render_heading(heading),
            Block::Highlights(highlights) => render_highlights(highlights),
            Block::Paragraph(text) => render_rich_text(text),
            Block::Image(image) => self.render_image(image),
            Block::Quote(quote) => render_quote(quote),
            Block::Embed(embed) => render_embed(embed),
            Block::TwoColumn(columns) => {
                let rendered: Vec<String> = columns
                    .columns
                    .iter()
                    .map(|column| {
                        format!(
                            "<div class=\"column\">{}</div>",
                            self.render_column(column)
                        )
                    })
                    .collect();
                format!(
                    "<div class=\"two-column-block\">{}</div>",
                    rendered.join("")
                )
            }
        }
    }

    /// Renders a whole body, one fragment per block, in order.
    #[must_use]
    pub fn render_body(&self, body: &StreamBody) -> String {
        let fragments: Vec<String> = body
            .iter()
            .map(|block| self.render_block(block))
            .filter(|fragment| !fragment.is_empty())
            .collect();
        fragments.join("\n")
    }

    /// Renders a full page: title, hero image, introduction, then the body.
    #[must_use]
    pub fn render_page(&self, page: &StandardPage) -> String {
        let mut out = String::new();
        out.push_str("<article>\n");
        out.push_str(&format!("<h1>{}</h1>\n", encode_text(&page.title)));
        if let Some(url) = page.image.and_then(|id| self.assets.image_url(id)) {
            out.push_str(&format!(
                "<img class=\"hero\" src=\"{}\" alt=\"\">\n",
                encode_double_quoted_attribute(&url)
            ));
        }
        if let Some(introduction) = &page.introduction {
            out.push_str(&format!(
                "<p class=\"introduction\">{}</p>\n",
                encode_text(introduction)
            ));
        }
        out.push_str(&self.render_body(&page.body));
        out.push_str("\n</article>\n");
        out
    }

    /// Renders the footer snippet.
    #[must_use]
    pub fn render_footer(&self, footer: &FooterText) -> String {
        format!("<footer>{}</footer>", render_rich_text(&footer.body))
    }

    /// Renders the header snippet. An unset or deleted image yields an
    /// empty header element.
    #[must_use]
    pub fn render_header(&self, header: &HeaderText) -> String {
        match header.image.and_then(|id| self.assets.image_url(id)) {
            Some(url) => format!(
                "<header><img src=\"{}\" alt=\"\"></header>",
                encode_double_quoted_attribute(&url)
            ),
            None => "<header></header>".to_string(),
        }
    }

    /// Renders a reference block: a source link plus its backing document.
    #[must_use]
    pub fn render_reference(&self, reference: &ReferenceBlock) -> String {
        let source = format!(
            "<a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(&reference.reference),
            encode_text(&reference.reference)
        );
        match self.assets.document_url(reference.document) {
            Some(url) => format!(
                "<p class=\"reference-block\">{source} <a class=\"document\" href=\"{}\">document</a></p>",
                encode_double_quoted_attribute(&url)
            ),
            None => format!("<p class=\"reference-block\">{source}</p>"),
        }
    }

    fn render_column(&self, column: &ColumnBlock) -> String {
        match column {
            ColumnBlock::Paragraph(text) => render_rich_text(text),
            ColumnBlock::Image(image) => self.render_image(image),
            ColumnBlock::Quote(quote) => render_quote(quote),
            ColumnBlock::Embed(embed) => render_embed(embed),
        }
    }

    fn render_image(&self, image: &ImageBlock) -> String {
        let Some(url) = self.assets.image_url(image.image) else {
            // Asset deleted since the block was stored.
            return String::new();
        };
        let alt = image.caption.as_deref().unwrap_or("");
        let mut out = format!(
            "<figure class=\"image-block\"><img src=\"{}\" alt=\"{}\">",
            encode_double_quoted_attribute(&url),
            encode_double_quoted_attribute(alt)
        );
        if image.caption.is_some() || image.attribution.is_some() {
            out.push_str("<figcaption>");
            if let Some(caption) = &image.caption {
                out.push_str(&encode_text(caption));
            }
            if let Some(attribution) = &image.attribution {
                if image.caption.is_some() {
                    out.push_str(" — ");
                }
                out.push_str(&format!(
                    "<span class=\"attribution\">{}</span>",
                    encode_text(attribution)
                ));
            }
            out.push_str("</figcaption>");
        }
        out.push_str("</figure>");
        out
    }
}

fn render_heading(heading: &HeadingBlock) -> String {
    let element = heading
        .heading_size
        .unwrap_or(HeadingSize::H2)
        .element();
    format!(
        "<{element}>{}</{element}>",
        encode_text(&heading.heading_text)
    )
}

fn render_rich_text(text: &RichText) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(text.as_str()));
    out.trim_end().to_string()
}

fn render_quote(quote: &QuoteBlock) -> String {
    let mut out = format!(
        "<blockquote class=\"quote-block\"><p>{}</p>",
        encode_text(&quote.text)
    );
    if let Some(attribution) = &quote.attribution {
        out.push_str(&format!("<cite>{}</cite>", encode_text(attribution)));
    }
    out.push_str("</blockquote>");
    out
}

fn render_highlights(highlights: &HighlightsBlock) -> String {
    let items: String = highlights
        .highlight_items
        .iter()
        .map(|item| format!("<li>{}</li>", encode_text(item)))
        .collect();
    format!(
        "<ul class=\"highlight-block {}\">{items}</ul>",
        highlights.format.css_class()
    )
}

fn render_embed(embed: &EmbedBlock) -> String {
    format!(
        "<div class=\"embed-block\"><iframe src=\"{}\" loading=\"lazy\"></iframe></div>",
        encode_double_quoted_attribute(&embed.url)
    )
}
