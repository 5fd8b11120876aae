// src/api/notion_client_adapter.rs
//! Adapter layer for converting notion-client types to our domain model.
//!
//! notion-client owns the wire format; everything past this module only sees
//! the closed `Block` enum and the slimmed-down `Page`.

use crate::error::AppError;
use crate::model::blocks::*;
use crate::model::common::BlockCommon;
use crate::model::{Block, Page, PropertyValue};
use crate::types::{BlockId, PageId, RichTextItem};
use std::collections::HashMap;

/// Convert notion-client Page to our domain Page
pub fn convert_page(notion_page: notion_client::objects::page::Page) -> Result<Page, AppError> {
    let id = PageId::from_api(&notion_page.id)?;

    Ok(Page {
        id,
        url: notion_page.url,
        properties: convert_page_properties(notion_page.properties),
    })
}

/// Convert notion-client Block to our domain Block
pub fn convert_block(
    notion_block: notion_client::objects::block::Block,
) -> Result<Block, AppError> {
    let common = convert_block_common(&notion_block)?;

    use notion_client::objects::block::BlockType;

    match notion_block.block_type {
        BlockType::Paragraph { paragraph } => Ok(Block::Paragraph(ParagraphBlock {
            common,
            content: convert_text_block_content(paragraph.rich_text),
        })),

        BlockType::Heading1 { heading_1 } => Ok(heading(common, 1, heading_1.rich_text)),
        BlockType::Heading2 { heading_2 } => Ok(heading(common, 2, heading_2.rich_text)),
        BlockType::Heading3 { heading_3 } => Ok(heading(common, 3, heading_3.rich_text)),

        BlockType::BulletedListItem { bulleted_list_item } => {
            Ok(Block::BulletedListItem(BulletedListItemBlock {
                common,
                content: convert_text_block_content(bulleted_list_item.rich_text),
            }))
        }

        BlockType::NumberedListItem { numbered_list_item } => {
            Ok(Block::NumberedListItem(NumberedListItemBlock {
                common,
                content: convert_text_block_content(numbered_list_item.rich_text),
            }))
        }

        BlockType::Quote { quote } => Ok(Block::Quote(QuoteBlock {
            common,
            content: convert_text_block_content(quote.rich_text),
        })),

        BlockType::Code { code } => Ok(Block::Code(CodeBlock {
            common,
            language: language_tag(&code.language),
            content: convert_text_block_content(code.rich_text),
        })),

        BlockType::Callout { callout } => Ok(Block::Callout(CalloutBlock {
            common,
            icon: callout.icon.map(convert_icon),
            content: convert_text_block_content(callout.rich_text),
        })),

        BlockType::Image { image } => Ok(Block::Image(ImageBlock {
            common,
            image: convert_file_object(image.file_type),
        })),

        BlockType::Bookmark { bookmark } => Ok(Block::Bookmark(LinkBlock {
            common,
            url: bookmark.url,
        })),

        BlockType::LinkPreview { link_preview } => Ok(Block::LinkPreview(LinkBlock {
            common,
            url: link_preview.url,
        })),

        BlockType::Embed { embed } => Ok(Block::Embed(LinkBlock {
            common,
            url: embed.url,
        })),

        BlockType::Table { table } => Ok(Block::Table(TableBlock {
            common,
            table_width: table.table_width as usize,
            has_column_header: table.has_column_header,
            has_row_header: table.has_row_header,
        })),

        BlockType::TableRow { table_row } => Ok(Block::TableRow(TableRowBlock {
            common,
            cells: table_row
                .cells
                .into_iter()
                .map(convert_rich_text_array)
                .collect(),
        })),

        _ => Ok(Block::Unsupported(UnsupportedBlock {
            common,
            block_type: variant_name(&format!("{:?}", notion_block.block_type)),
        })),
    }
}

fn heading(
    common: BlockCommon,
    level: u8,
    rich_text: Vec<notion_client::objects::rich_text::RichText>,
) -> Block {
    Block::Heading(HeadingBlock {
        common,
        level,
        content: convert_text_block_content(rich_text),
    })
}

/// Takes `Divider` out of `Divider { divider: .. }`.
fn variant_name(debug: &str) -> String {
    debug
        .split(|c: char| c == '{' || c == '(')
        .next()
        .unwrap_or(debug)
        .trim()
        .to_string()
}

/// The API's language tag, e.g. `rust` or `plain text`.
fn language_tag<L>(language: &L) -> String
where
    L: serde::Serialize + std::fmt::Debug,
{
    match serde_json::to_value(language) {
        Ok(serde_json::Value::String(tag)) => tag,
        _ => format!("{:?}", language).to_lowercase(),
    }
}

/// Convert block common fields
fn convert_block_common(
    notion_block: &notion_client::objects::block::Block,
) -> Result<BlockCommon, AppError> {
    let raw_id = notion_block
        .id
        .as_deref()
        .ok_or_else(|| AppError::MalformedResponse("block without an id".to_string()))?;

    Ok(BlockCommon {
        id: BlockId::from_api(raw_id)?,
        children: Vec::new(),
        has_children: notion_block.has_children.unwrap_or(false),
    })
}

fn convert_text_block_content(
    rich_text: Vec<notion_client::objects::rich_text::RichText>,
) -> TextBlockContent {
    TextBlockContent::new(convert_rich_text_array(rich_text))
}

fn convert_rich_text_array(
    rich_texts: Vec<notion_client::objects::rich_text::RichText>,
) -> Vec<RichTextItem> {
    rich_texts.into_iter().map(convert_rich_text).collect()
}

/// Keeps the display text and the top-level link of a span; styling is dropped.
fn convert_rich_text(rich_text: notion_client::objects::rich_text::RichText) -> RichTextItem {
    use notion_client::objects::rich_text::RichText as NcRichText;

    match rich_text {
        NcRichText::Text {
            text,
            plain_text,
            href,
            ..
        } => RichTextItem {
            plain_text: plain_text.unwrap_or(text.content),
            href,
        },
        NcRichText::Mention {
            plain_text, href, ..
        } => RichTextItem { plain_text, href },
        NcRichText::Equation {
            plain_text, href, ..
        } => RichTextItem { plain_text, href },
        _ => {
            log::debug!("Unsupported rich text type, keeping an empty span");
            RichTextItem::plain_text("")
        }
    }
}

fn convert_file_object(file: notion_client::objects::file::File) -> FileObject {
    use notion_client::objects::file::File as NcFile;

    match file {
        NcFile::External { external } => FileObject::External {
            external: ExternalFile { url: external.url },
        },
        NcFile::File { file } => FileObject::File {
            file: NotionFile {
                url: file.url,
                expiry_time: Some(file.expiry_time),
            },
        },
    }
}

fn convert_icon(icon: notion_client::objects::block::Icon) -> Icon {
    use notion_client::objects::block::Icon as NcIcon;

    match icon {
        NcIcon::Emoji(notion_client::objects::emoji::Emoji::Emoji { emoji }) => {
            Icon::Emoji { emoji }
        }
        NcIcon::File(file) => match convert_file_object(file) {
            FileObject::File { file } => Icon::File { file },
            FileObject::External { external } => Icon::External { external },
        },
    }
}

/// Only title properties carry data downstream; every other kind is kept as a marker.
fn convert_page_properties(
    properties: HashMap<String, notion_client::objects::page::PageProperty>,
) -> HashMap<String, PropertyValue> {
    use notion_client::objects::page::PageProperty;

    properties
        .into_iter()
        .map(|(name, property)| {
            let value = match property {
                PageProperty::Title { title, .. } => PropertyValue::Title {
                    title: convert_rich_text_array(title),
                },
                _ => PropertyValue::Other,
            };
            (name, value)
        })
        .collect()
}
