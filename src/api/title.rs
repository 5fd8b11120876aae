// src/api/title.rs
//! Entry title lookup.
//!
//! A missing title is an ordinary outcome here, so lookups return `Option`
//! and log whatever went wrong instead of failing the run.

use super::NotionRepository;
use crate::model::Page;
use crate::types::PageId;
use std::sync::Arc;

/// Resolves a page's title from its title-kind property.
#[derive(Clone)]
pub struct TitleResolver {
    repository: Arc<dyn NotionRepository>,
}

impl TitleResolver {
    pub fn new(repository: Arc<dyn NotionRepository>) -> Self {
        Self { repository }
    }

    /// The plain text of the title's first span, or `None` when the page has
    /// no usable title or could not be read.
    pub async fn resolve(&self, id: &PageId) -> Option<String> {
        match self.repository.retrieve_page(id).await {
            Ok(page) => {
                let title = title_from_page(&page);
                if title.is_none() {
                    log::warn!("Page {} has no title property with text", id);
                }
                title
            }
            Err(e) => {
                log::error!("Failed to retrieve title for page {}: {}", id, e);
                None
            }
        }
    }
}

/// Title of an already retrieved page: first span of the title-kind property.
pub fn title_from_page(page: &Page) -> Option<String> {
    page.title_property()
        .and_then(|spans| spans.first())
        .map(|span| span.plain_text.clone())
}
