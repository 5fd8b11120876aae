// src/formatting/html.rs
//! Raw HTML fragments for blocks Hatena markdown has no syntax for.

use crate::constants::DEFAULT_CALLOUT_EMOJI;
use crate::model::{Block, CalloutBlock, TableBlock};
use crate::types::{concat_plain_text, RichTextItem};
use std::fmt::Write;

/// CSS class for a callout icon; unknown icons get `callout-default`.
pub fn callout_class(emoji: &str) -> &'static str {
    match emoji {
        "💡" | "\u{2139}\u{fe0f}" => "callout-info",
        "\u{26a0}\u{fe0f}" => "callout-warning",
        "🔥" => "callout-danger",
        "✅" => "callout-success",
        _ => "callout-default",
    }
}

pub fn render_callout(callout: &CalloutBlock) -> String {
    let emoji = callout.emoji().unwrap_or(DEFAULT_CALLOUT_EMOJI);
    let text = concat_plain_text(&callout.content.rich_text);

    format!(
        "<div class=\"callout {}\">\n<div class=\"callout-icon\">{}</div>\n<div class=\"callout-content\"><p>{}</p></div>\n</div>",
        callout_class(emoji),
        emoji,
        html_escape::encode_text(&text)
    )
}

/// Renders a table from its `TableRow` children.
///
/// With a column header the first row goes into `<thead>` as `<th>` cells;
/// every other row goes into `<tbody>`.
pub fn render_table(table: &TableBlock) -> String {
    let rows: Vec<&[Vec<RichTextItem>]> = table
        .common
        .children
        .iter()
        .filter_map(|child| match child {
            Block::TableRow(row) => Some(row.cells.as_slice()),
            _ => None,
        })
        .collect();

    let (header, body) = match rows.split_first() {
        Some((first, rest)) if table.has_column_header => (Some(*first), rest),
        _ => (None, rows.as_slice()),
    };

    let mut out = String::from("<table>\n");
    if let Some(cells) = header {
        out.push_str("<thead>\n");
        push_row(&mut out, cells, "th");
        out.push_str("</thead>\n");
    }
    out.push_str("<tbody>\n");
    for cells in body {
        push_row(&mut out, cells, "td");
    }
    out.push_str("</tbody>\n</table>");
    out
}

fn push_row(out: &mut String, cells: &[Vec<RichTextItem>], tag: &str) {
    out.push_str("<tr>");
    for cell in cells {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "<{tag}>{}</{tag}>",
            html_escape::encode_text(&concat_plain_text(cell))
        );
    }
    out.push_str("</tr>\n");
}
