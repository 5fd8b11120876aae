// src/api/mod.rs
//! Notion API interaction: the ability to read a page and its block tree.
//!
//! This module provides a data-oriented interface to the Notion API,
//! with clear separation between I/O operations, parsing, and business logic.

pub mod client;
mod fetcher;
pub mod notion_client_adapter;
pub mod parser;
mod responses;
mod simple_pagination;
mod title;
mod types;

use crate::error::AppError;
use crate::model::{Block, Page};
use crate::types::{BlockId, PageId};

/// The ability to retrieve content from a Notion workspace.
///
/// Business logic depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Retrieves a page object with its properties.
    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError>;

    /// Retrieves one page of a block's children, starting at `cursor`.
    async fn list_children(
        &self,
        parent: &BlockId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Block>, AppError>;
}

// Re-export the public interface
pub use client::{ApiResponse, NotionHttpClient};
pub use fetcher::BlockFetcher;
pub use simple_pagination::fetch_all_pages;
pub use title::{title_from_page, TitleResolver};
pub use types::{FetchMetadata, FetchResult, PaginatedResponse, PaginationMode, PaginationResult};
