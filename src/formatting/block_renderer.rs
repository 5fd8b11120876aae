// src/formatting/block_renderer.rs
//! Block rendering engine: converts a Notion block tree to Hatena markdown.
//!
//! Rendering is one pass over the top-level sequence. Each block yields at
//! most one segment; segments are joined with a blank line. Only tables look
//! at their children, which hold the table's rows.

use super::html::{render_callout, render_table};
use super::rich_text::{hard_breaks, render_spans};
use crate::hatena::MediaRelay;
use crate::model::{Block, CodeBlock, ImageBlock, LinkBlock};
use crate::types::{concat_plain_text, MarkupDocument};

/// Renders blocks in order, re-hosting images through `relay`.
pub struct HatenaBlockRenderer<'a> {
    relay: &'a dyn MediaRelay,
}

impl<'a> HatenaBlockRenderer<'a> {
    pub fn new(relay: &'a dyn MediaRelay) -> Self {
        Self { relay }
    }

    /// Renders the whole sequence into one document.
    pub async fn render(&self, blocks: &[Block]) -> MarkupDocument {
        log::debug!("Rendering {} top-level blocks", blocks.len());

        let mut segments = Vec::with_capacity(blocks.len());
        for block in blocks {
            match self.render_block(block).await {
                Some(segment) => segments.push(segment),
                None => log::debug!("Skipped {} block {}", block.block_type(), block.id()),
            }
        }

        let document = MarkupDocument::from_segments(segments);
        log::debug!("Rendered {} bytes", document.as_str().len());
        document
    }

    /// The segment for one block, or `None` when the block renders to nothing.
    pub async fn render_block(&self, block: &Block) -> Option<String> {
        match block {
            Block::Heading(b) => Some(format!(
                "{} {}",
                "#".repeat(b.level as usize),
                b.content.first_plain_text()
            )),
            Block::Paragraph(b) => Some(hard_breaks(&render_spans(&b.content.rich_text))),
            Block::BulletedListItem(b) => Some(format!("- {}", b.content.first_plain_text())),
            Block::NumberedListItem(b) => Some(format!("1. {}", b.content.first_plain_text())),
            Block::Quote(b) => Some(format!("> {}", b.content.first_plain_text())),
            Block::Code(b) => Some(format_code_block(b)),
            Block::Image(b) => Some(self.format_image(b).await),
            Block::Bookmark(b) | Block::LinkPreview(b) | Block::Embed(b) => format_embed(b),
            Block::Callout(b) => Some(render_callout(b)),
            Block::Table(b) => Some(render_table(b)),
            Block::TableRow(_) | Block::Unsupported(_) => None,
        }
    }

    /// The relay's token when it succeeds, otherwise a plain image link to
    /// the original URL.
    async fn format_image(&self, image: &ImageBlock) -> String {
        let url = image.image.url();
        match self.relay.relay(url).await {
            Some(token) => token,
            None => {
                log::warn!("Image relay failed, linking original URL {}", url);
                format!("![image]({})", url)
            }
        }
    }
}

/// Renders a block sequence with the given relay.
pub async fn render_blocks(blocks: &[Block], relay: &dyn MediaRelay) -> MarkupDocument {
    HatenaBlockRenderer::new(relay).render(blocks).await
}

fn format_code_block(code: &CodeBlock) -> String {
    format!(
        "```{}\n{}\n```",
        code.language,
        concat_plain_text(&code.content.rich_text)
    )
}

fn format_embed(link: &LinkBlock) -> Option<String> {
    if link.url.is_empty() {
        None
    } else {
        Some(format!("[{}:embed]", link.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blocks::*;
    use crate::model::BlockCommon;
    use crate::types::RichTextItem;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Relay that answers with a fixed token, or fails when `token` is `None`.
    struct FixedRelay {
        token: Option<String>,
        seen: Mutex<Vec<String>>,
    }

    impl FixedRelay {
        fn new(token: Option<&str>) -> Self {
            Self {
                token: token.map(str::to_string),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl MediaRelay for FixedRelay {
        async fn relay(&self, url: &str) -> Option<String> {
            self.seen.lock().unwrap().push(url.to_string());
            self.token.clone()
        }
    }

    fn text(content: &str) -> TextBlockContent {
        TextBlockContent::new(vec![RichTextItem::plain_text(content)])
    }

    fn heading(level: u8, content: &str) -> Block {
        Block::Heading(HeadingBlock {
            common: BlockCommon::default(),
            level,
            content: text(content),
        })
    }

    fn paragraph(spans: Vec<RichTextItem>) -> Block {
        Block::Paragraph(ParagraphBlock {
            common: BlockCommon::default(),
            content: TextBlockContent::new(spans),
        })
    }

    fn image(url: &str) -> Block {
        Block::Image(ImageBlock {
            common: BlockCommon::default(),
            image: FileObject::File {
                file: NotionFile {
                    url: url.to_string(),
                    expiry_time: None,
                },
            },
        })
    }

    fn unsupported() -> Block {
        Block::Unsupported(UnsupportedBlock {
            common: BlockCommon::default(),
            block_type: "divider".to_string(),
        })
    }

    async fn render(blocks: &[Block]) -> String {
        let relay = FixedRelay::new(None);
        render_blocks(blocks, &relay).await.into_string()
    }

    #[tokio::test]
    async fn test_headings() {
        let blocks = vec![heading(1, "One"), heading(2, "Two"), heading(3, "Three")];
        assert_eq!(render(&blocks).await, "# One\n\n## Two\n\n### Three");
    }

    #[tokio::test]
    async fn test_heading_uses_first_span_only() {
        let block = Block::Heading(HeadingBlock {
            common: BlockCommon::default(),
            level: 2,
            content: TextBlockContent::new(vec![
                RichTextItem::plain_text("First"),
                RichTextItem::plain_text(" second"),
            ]),
        });
        assert_eq!(render(&[block]).await, "## First");
    }

    #[tokio::test]
    async fn test_paragraph_links_and_breaks() {
        let block = paragraph(vec![
            RichTextItem::plain_text("line one\nsee "),
            RichTextItem::link("docs", "https://docs.rs"),
            RichTextItem::plain_text(" or "),
            RichTextItem::link("https://crates.io", "https://crates.io"),
        ]);
        assert_eq!(
            render(&[block]).await,
            "line one  \nsee [https://docs.rs:title=docs] or https://crates.io"
        );
    }

    #[tokio::test]
    async fn test_segments_follow_tree_order() {
        let blocks = vec![
            paragraph(vec![RichTextItem::plain_text("Hello")]),
            heading(1, "Title"),
        ];
        assert_eq!(render(&blocks).await, "Hello\n\n# Title");
    }

    #[tokio::test]
    async fn test_empty_paragraph_still_emits_segment() {
        let blocks = vec![heading(1, "A"), paragraph(vec![]), heading(1, "B")];
        assert_eq!(render(&blocks).await, "# A\n\n\n\n# B");
    }

    #[tokio::test]
    async fn test_list_items_quote_and_code() {
        let blocks = vec![
            Block::BulletedListItem(BulletedListItemBlock {
                common: BlockCommon::default(),
                content: text("bullet"),
            }),
            Block::NumberedListItem(NumberedListItemBlock {
                common: BlockCommon::default(),
                content: text("first"),
            }),
            Block::NumberedListItem(NumberedListItemBlock {
                common: BlockCommon::default(),
                content: text("second"),
            }),
            Block::Quote(QuoteBlock {
                common: BlockCommon::default(),
                content: text("quoted"),
            }),
            Block::Code(CodeBlock {
                common: BlockCommon::default(),
                language: "rust".to_string(),
                content: TextBlockContent::new(vec![
                    RichTextItem::plain_text("fn main() {\n"),
                    RichTextItem::plain_text("}"),
                ]),
            }),
        ];
        assert_eq!(
            render(&blocks).await,
            "- bullet\n\n1. first\n\n1. second\n\n> quoted\n\n```rust\nfn main() {\n}\n```"
        );
    }

    #[tokio::test]
    async fn test_embeds() {
        let link = |url: &str| LinkBlock {
            common: BlockCommon::default(),
            url: url.to_string(),
        };
        let blocks = vec![
            Block::Bookmark(link("https://a.example")),
            Block::LinkPreview(link("https://b.example")),
            Block::Embed(link("https://c.example")),
            Block::Embed(link("")),
        ];
        assert_eq!(
            render(&blocks).await,
            "[https://a.example:embed]\n\n[https://b.example:embed]\n\n[https://c.example:embed]"
        );
    }

    #[tokio::test]
    async fn test_image_token_or_fallback() {
        let blocks = vec![image("https://s3.example/a.png?sig=1")];

        let relay = FixedRelay::new(Some("[f:id:u:1:plain]"));
        let rendered = render_blocks(&blocks, &relay).await;
        assert_eq!(rendered.as_str(), "[f:id:u:1:plain]");
        assert_eq!(
            *relay.seen.lock().unwrap(),
            vec!["https://s3.example/a.png?sig=1".to_string()]
        );

        let failing = FixedRelay::new(None);
        let rendered = render_blocks(&blocks, &failing).await;
        assert_eq!(rendered.as_str(), "![image](https://s3.example/a.png?sig=1)");
    }

    #[tokio::test]
    async fn test_unsupported_blocks_are_skipped() {
        let plain = vec![heading(1, "Title"), paragraph(vec![RichTextItem::plain_text("Hello")])];
        let with_unknown = vec![
            unsupported(),
            heading(1, "Title"),
            unsupported(),
            paragraph(vec![RichTextItem::plain_text("Hello")]),
            unsupported(),
        ];

        assert_eq!(render(&plain).await, "# Title\n\nHello");
        assert_eq!(render(&with_unknown).await, render(&plain).await);
    }

    #[tokio::test]
    async fn test_stray_table_row_renders_nothing() {
        let row = Block::TableRow(TableRowBlock {
            common: BlockCommon::default(),
            cells: vec![vec![RichTextItem::plain_text("x")]],
        });
        assert_eq!(render(&[row]).await, "");
    }

    #[tokio::test]
    async fn test_rendering_is_deterministic() {
        let blocks = vec![
            heading(2, "Notes"),
            paragraph(vec![RichTextItem::link("docs", "https://docs.rs")]),
            image("https://s3.example/b.png"),
        ];
        assert_eq!(render(&blocks).await, render(&blocks).await);
    }
}
