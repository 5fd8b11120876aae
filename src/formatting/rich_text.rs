// src/formatting/rich_text.rs
//! Inline text in Hatena notation.

use crate::types::RichTextItem;

/// Renders one span. A linked span becomes `[{href}:title={text}]`, or the
/// bare URL when the text is the URL itself.
pub fn render_span(item: &RichTextItem) -> String {
    match &item.href {
        Some(href) if *href == item.plain_text => href.clone(),
        Some(href) => format!("[{}:title={}]", href, item.plain_text),
        None => item.plain_text.clone(),
    }
}

/// Renders spans back to back with no separator.
pub fn render_spans(items: &[RichTextItem]) -> String {
    items.iter().map(render_span).collect()
}

/// Turns every newline into a markdown hard break.
pub fn hard_breaks(text: &str) -> String {
    text.replace('\n', "  \n")
}
