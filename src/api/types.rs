// src/api/types.rs
//! Type definitions for the Notion API module.

use serde::Deserialize;

/// How far the fetcher reads a paginated children listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Follow `next_cursor` until the listing is exhausted.
    #[default]
    FollowCursor,
    /// Read only the first page of every listing, dropping the rest.
    FirstPageOnly,
}

/// Result of a fetch operation with metadata.
#[derive(Debug, Clone)]
pub struct FetchResult<T> {
    /// The fetched data
    pub data: T,
    /// Metadata about the fetch operation
    pub metadata: FetchMetadata,
}

/// Metadata about a fetch operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchMetadata {
    /// Blocks retrieved, nested ones included
    pub blocks_fetched: usize,
    /// Children-listing requests issued
    pub requests_made: usize,
    /// Deepest level that had to be listed; the root's children are level 1
    pub max_depth_reached: usize,
    /// Listings that had more pages than were read
    pub truncated_listings: usize,
}

/// Generic paginated response from Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// A single, final page holding `results`.
    pub fn last_page(results: Vec<T>) -> Self {
        Self {
            object: "list".to_string(),
            results,
            next_cursor: None,
            has_more: false,
        }
    }
}

/// Result of a pagination operation.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: usize,
    /// Whether the listing still had pages when reading stopped.
    pub truncated: bool,
}
