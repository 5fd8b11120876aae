// tests/common/mod.rs
//! In-memory collaborators shared by the integration tests.

#![allow(dead_code)]

use notion2hatena::{
    parse_blocks_pagination, parse_page_response, ApiResponse, AppError, Block, BlockId,
    EntryPublisher, MarkupDocument, MediaRelay, NotionRepository, Page, PageId,
    PaginatedResponse, PublishMode, PublishReceipt,
};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

pub const PAGE_ID: &str = "5f8e2b1c9a4d4e3f8b7a1c2d3e4f5a6b";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/api_responses")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}

pub fn ok_response(body: String) -> ApiResponse<String> {
    ApiResponse {
        data: body,
        status: reqwest::StatusCode::OK,
        url: "https://api.notion.com/v1/test".to_string(),
    }
}

pub fn fixture_page(name: &str) -> Page {
    parse_page_response(ok_response(fixture(name))).expect("page fixture parses")
}

pub fn fixture_listing(name: &str) -> PaginatedResponse<Block> {
    parse_blocks_pagination(ok_response(fixture(name))).expect("listing fixture parses")
}

/// Serves a page and children listings keyed by parent block.
#[derive(Default)]
pub struct FakeNotion {
    page: Option<Page>,
    children: HashMap<BlockId, Vec<Block>>,
    pub page_calls: Mutex<usize>,
    pub listing_calls: Mutex<usize>,
}

impl FakeNotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_children(mut self, parent: BlockId, blocks: Vec<Block>) -> Self {
        self.children.insert(parent, blocks);
        self
    }

    pub fn total_calls(&self) -> usize {
        *self.page_calls.lock().unwrap() + *self.listing_calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl NotionRepository for FakeNotion {
    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError> {
        *self.page_calls.lock().unwrap() += 1;
        self.page.clone().ok_or_else(|| {
            AppError::MissingConfiguration(format!("no page fixture for {}", id))
        })
    }

    async fn list_children(
        &self,
        parent: &BlockId,
        _cursor: Option<String>,
    ) -> Result<PaginatedResponse<Block>, AppError> {
        *self.listing_calls.lock().unwrap() += 1;
        Ok(PaginatedResponse::last_page(
            self.children.get(parent).cloned().unwrap_or_default(),
        ))
    }
}

/// Hands out sequential Fotolife-style tokens, or fails every upload.
pub struct ScriptedRelay {
    succeed: bool,
    pub urls: Mutex<Vec<String>>,
}

impl ScriptedRelay {
    pub fn succeeding() -> Self {
        Self {
            succeed: true,
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            succeed: false,
            urls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl MediaRelay for ScriptedRelay {
    async fn relay(&self, url: &str) -> Option<String> {
        let mut urls = self.urls.lock().unwrap();
        urls.push(url.to_string());
        self.succeed
            .then(|| format!("[f:id:alice:2025062000000{}p:plain]", urls.len()))
    }
}

/// One captured publish call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posted {
    pub title: String,
    pub body: String,
    pub mode: PublishMode,
}

/// Records publish calls; rejects them all when `reject_with` is set.
#[derive(Default)]
pub struct RecordingPublisher {
    reject_with: Option<u16>,
    pub posts: Mutex<Vec<Posted>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn posts(&self) -> Vec<Posted> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EntryPublisher for RecordingPublisher {
    async fn publish(
        &self,
        title: &str,
        document: &MarkupDocument,
        mode: PublishMode,
    ) -> Result<PublishReceipt, AppError> {
        self.posts.lock().unwrap().push(Posted {
            title: title.to_string(),
            body: document.as_str().to_string(),
            mode,
        });
        match self.reject_with {
            Some(status) => Err(AppError::PublishRejected {
                status,
                body: "<error>rejected</error>".to_string(),
            }),
            None => Ok(PublishReceipt {
                mode,
                location: Some(
                    "https://blog.hatena.ne.jp/alice/alice.hatenablog.com/atom/entry/1".to_string(),
                ),
            }),
        }
    }
}
