mod block;
pub mod blocks;
pub mod common;

pub use block::{count_blocks, Block};
pub use blocks::*;
pub use common::*;

use crate::types::{PageId, RichTextItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Notion page as far as publishing is concerned: its ID and properties.
///
/// Block content is fetched separately through the children endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub url: String,
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    /// Finds the property of kind `title`, whatever it is named.
    pub fn title_property(&self) -> Option<&[RichTextItem]> {
        self.properties.values().find_map(|value| match value {
            PropertyValue::Title { title } => Some(title.as_slice()),
            PropertyValue::Other => None,
        })
    }
}

/// A page property value; only the title kind carries data here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Title { title: Vec<RichTextItem> },
    Other,
}
