// src/api/simple_pagination.rs
//! Cursor-driven pagination over any listing endpoint.

use super::types::{PaginatedResponse, PaginationMode, PaginationResult};
use crate::error::AppError;

/// Fetches listing pages with `fetch_fn` until the listing is exhausted, or
/// after the first page when `mode` says so.
pub async fn fetch_all_pages<T, F, Fut>(
    mut fetch_fn: F,
    mode: PaginationMode,
) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0usize;

    let truncated = loop {
        let response = fetch_fn(cursor.take()).await?;
        pages_fetched += 1;
        all_items.extend(response.results);

        match (response.has_more, response.next_cursor) {
            (true, Some(next)) if mode == PaginationMode::FollowCursor => cursor = Some(next),
            (true, _) if mode == PaginationMode::FirstPageOnly => break true,
            _ => break false,
        }
    };

    Ok(PaginationResult {
        items: all_items,
        pages_fetched,
        truncated,
    })
}
