// src/hatena/mod.rs
//! Hatena services: Fotolife image hosting and Blog entry publishing.
//!
//! Both speak AtomPub. Fotolife authenticates with a WSSE header, the Blog
//! endpoint with HTTP basic auth.

mod blog;
mod fotolife;
mod wsse;

use crate::error::AppError;
use crate::types::{MarkupDocument, PublishMode};

pub use blog::{build_entry_xml, HatenaBlogClient, PublishReceipt};
pub use fotolife::{build_upload_envelope, parse_upload_response, FotolifeRelay, RelayError};
pub use wsse::{wsse_header, wsse_header_with};

/// The ability to move an ephemeral image into permanent hosting.
///
/// Never fails: `None` tells the caller to keep the original URL.
#[async_trait::async_trait]
pub trait MediaRelay: Send + Sync {
    async fn relay(&self, url: &str) -> Option<String>;
}

/// The ability to create a blog entry.
#[async_trait::async_trait]
pub trait EntryPublisher: Send + Sync {
    async fn publish(
        &self,
        title: &str,
        document: &MarkupDocument,
        mode: PublishMode,
    ) -> Result<PublishReceipt, AppError>;
}
