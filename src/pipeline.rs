// src/pipeline.rs
//! The Notion-to-Hatena run: resolve title, fetch blocks, render, publish.
//!
//! Every collaborator is injected, so a run can be driven entirely by
//! in-memory fakes.

use crate::api::{BlockFetcher, NotionHttpClient, NotionRepository, PaginationMode, TitleResolver};
use crate::config::PipelineConfig;
use crate::constants::HTTP_TIMEOUT;
use crate::error::AppError;
use crate::formatting::render_blocks;
use crate::hatena::{EntryPublisher, FotolifeRelay, HatenaBlogClient, MediaRelay, PublishReceipt};
use crate::model::count_blocks;
use crate::types::{PageId, PublishMode};
use std::fmt;
use std::sync::Arc;

/// Why a run ended without publishing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitle,
    EmptyContent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "No title found on the page"),
            Self::EmptyContent => write!(f, "No content found on the page"),
        }
    }
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Published(PublishReceipt),
    Skipped { reason: SkipReason },
}

/// Orchestrates retrieval, rendering and publishing of one Notion page.
pub struct NotionToHatena {
    titles: TitleResolver,
    fetcher: BlockFetcher,
    relay: Arc<dyn MediaRelay>,
    publisher: Arc<dyn EntryPublisher>,
}

impl NotionToHatena {
    pub fn new(
        repository: Arc<dyn NotionRepository>,
        relay: Arc<dyn MediaRelay>,
        publisher: Arc<dyn EntryPublisher>,
        pagination: PaginationMode,
    ) -> Self {
        Self {
            titles: TitleResolver::new(Arc::clone(&repository)),
            fetcher: BlockFetcher::new(repository, pagination),
            relay,
            publisher,
        }
    }

    /// Wires the real Notion and Hatena clients from a resolved configuration.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, AppError> {
        let notion: Arc<dyn NotionRepository> =
            Arc::new(NotionHttpClient::new(&config.notion_api_key)?);
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        let relay = Arc::new(FotolifeRelay::new(http.clone(), config.hatena.clone()));
        let publisher = Arc::new(HatenaBlogClient::new(http, config.hatena.clone()));

        Ok(Self::new(notion, relay, publisher, config.pagination))
    }

    /// Validates `input` as a page ID or URL, then runs the page.
    ///
    /// An invalid identifier fails before any request is made.
    pub async fn run(&self, input: &str, mode: PublishMode) -> Result<RunOutcome, AppError> {
        let page_id = PageId::parse(input)?;
        self.run_page(&page_id, mode).await
    }

    /// Publishes one page. A page without a title or without blocks is
    /// skipped with a warning and no publish call.
    pub async fn run_page(&self, page_id: &PageId, mode: PublishMode) -> Result<RunOutcome, AppError> {
        log::info!("Fetching content from Notion page: {}", page_id);
        let title = self
            .titles
            .resolve(page_id)
            .await
            .filter(|title| !title.is_empty());
        let tree = self.fetcher.fetch_tree(&page_id.as_block_id()).await?;

        let Some(title) = title else {
            return Ok(self.skip(SkipReason::MissingTitle));
        };
        if tree.data.is_empty() {
            return Ok(self.skip(SkipReason::EmptyContent));
        }

        log::info!(
            "Converting {} blocks ({} top-level) to Hatena markdown...",
            count_blocks(&tree.data),
            tree.data.len()
        );
        let document = render_blocks(&tree.data, self.relay.as_ref()).await;

        log::info!("Posting to Hatena Blog with title: {}", title);
        let receipt = self.publisher.publish(&title, &document, mode).await?;
        Ok(RunOutcome::Published(receipt))
    }

    fn skip(&self, reason: SkipReason) -> RunOutcome {
        log::warn!("{}; nothing was posted.", reason);
        RunOutcome::Skipped { reason }
    }
}
