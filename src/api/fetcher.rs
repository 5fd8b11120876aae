// src/api/fetcher.rs
//! Depth-first retrieval of a block tree.
//!
//! Children are listed in API order and each child's own subtree is resolved
//! before its next sibling. Requests are issued one at a time.

use super::simple_pagination::fetch_all_pages;
use super::types::{FetchMetadata, FetchResult, PaginationMode};
use super::NotionRepository;
use crate::error::AppError;
use crate::model::Block;
use crate::types::BlockId;
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

/// Fetches the full block tree under a page or block.
#[derive(Clone)]
pub struct BlockFetcher {
    repository: Arc<dyn NotionRepository>,
    pagination: PaginationMode,
}

impl BlockFetcher {
    pub fn new(repository: Arc<dyn NotionRepository>, pagination: PaginationMode) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// Returns the children of `root`, each with its subtree attached.
    ///
    /// A block without children yields an empty list. Any transport or
    /// service failure aborts the whole fetch.
    pub async fn fetch_tree(&self, root: &BlockId) -> Result<FetchResult<Vec<Block>>, AppError> {
        log::info!(
            "Fetching block tree for {} (pagination: {:?})",
            root,
            self.pagination
        );

        let mut metadata = FetchMetadata::default();
        let blocks = self.fetch_level(root.clone(), 1, &mut metadata).await?;

        log::info!(
            "Fetched {} blocks in {} requests (max depth {})",
            metadata.blocks_fetched,
            metadata.requests_made,
            metadata.max_depth_reached
        );
        if metadata.truncated_listings > 0 {
            log::warn!(
                "{} listings had more pages than were read",
                metadata.truncated_listings
            );
        }

        Ok(FetchResult {
            data: blocks,
            metadata,
        })
    }

    fn fetch_level<'a>(
        &'a self,
        parent: BlockId,
        depth: usize,
        metadata: &'a mut FetchMetadata,
    ) -> BoxFuture<'a, Result<Vec<Block>, AppError>> {
        async move {
            let repository = &self.repository;
            let listing = fetch_all_pages(
                |cursor| {
                    let parent = parent.clone();
                    async move { repository.list_children(&parent, cursor).await }
                },
                self.pagination,
            )
            .await?;

            log::debug!(
                "Listed {} children of {} at depth {} ({} pages)",
                listing.items.len(),
                parent,
                depth,
                listing.pages_fetched
            );

            metadata.requests_made += listing.pages_fetched;
            metadata.blocks_fetched += listing.items.len();
            metadata.max_depth_reached = metadata.max_depth_reached.max(depth);
            if listing.truncated {
                metadata.truncated_listings += 1;
            }

            let mut blocks = listing.items;
            for block in blocks.iter_mut() {
                if block.has_children() {
                    let children = self
                        .fetch_level(block.id().clone(), depth + 1, metadata)
                        .await?;
                    block.set_children(children);
                }
            }

            Ok(blocks)
        }
        .boxed()
    }
}
