use serde::{Deserialize, Serialize};

/// A run of inline text with an optional hyperlink target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create a plain text item.
    pub fn plain_text(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            href: None,
        }
    }

    /// Create a text item that links to `href`.
    pub fn link(text: &str, href: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            href: Some(href.to_string()),
        }
    }
}

/// Concatenates the plain text of every item, ignoring links.
pub fn concat_plain_text(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}
