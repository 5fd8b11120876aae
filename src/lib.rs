// src/lib.rs
//! notion2hatena library: publishes Notion pages to Hatena Blog.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`, `NotionErrorCode`
//! - **Configuration**: `CommandLineInput`, `PipelineConfig`
//! - **Domain model**: `Block`, `Page`, the block payload types
//! - **Domain types**: `PageId`, `BlockId`, `ApiKey`, `HatenaCredentials`, etc.
//! - **Notion API**: `NotionRepository`, `NotionHttpClient`, `BlockFetcher`, `TitleResolver`
//! - **Hatena**: `MediaRelay`, `EntryPublisher`, `FotolifeRelay`, `HatenaBlogClient`
//! - **Formatting**: `render_blocks`, `HatenaBlockRenderer`
//! - **Pipeline**: `NotionToHatena`, `RunOutcome`

mod api;
mod config;
mod constants;
mod error;
mod formatting;
mod hatena;
mod model;
mod pipeline;
mod types;

#[cfg(test)]
mod http_test_server;

// --- Error Handling ---
pub use crate::error::{AppError, NotionClientError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig};

// --- Domain Model ---
pub use crate::model::{count_blocks, Block, BlockCommon, Page, PropertyValue};

// --- Block Types ---
pub use crate::model::blocks::{
    BulletedListItemBlock, CalloutBlock, CodeBlock, ExternalFile, FileObject, HeadingBlock, Icon,
    ImageBlock, LinkBlock, NotionFile, NumberedListItemBlock, ParagraphBlock, QuoteBlock,
    TableBlock, TableRowBlock, TextBlockContent, UnsupportedBlock,
};

// --- Domain Types ---
pub use crate::types::{
    concat_plain_text, ApiKey, BlockId, HatenaCredentials, MarkupDocument, PageId, PublishMode,
    RichTextItem,
};

// --- Notion API ---
pub use crate::api::{
    fetch_all_pages,
    parser::{parse_blocks_pagination, parse_page_response},
    title_from_page, ApiResponse, BlockFetcher, FetchMetadata, FetchResult, NotionHttpClient,
    NotionRepository, PaginatedResponse, PaginationMode, PaginationResult, TitleResolver,
};

// --- Hatena ---
pub use crate::hatena::{
    build_entry_xml, build_upload_envelope, parse_upload_response, wsse_header,
    wsse_header_with, EntryPublisher, FotolifeRelay, HatenaBlogClient, MediaRelay,
    PublishReceipt, RelayError,
};

// --- Formatting ---
pub use crate::formatting::{callout_class, render_blocks, render_span, HatenaBlockRenderer};

// --- Pipeline ---
pub use crate::pipeline::{NotionToHatena, RunOutcome, SkipReason};
