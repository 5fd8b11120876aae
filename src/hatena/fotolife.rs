// src/hatena/fotolife.rs
//! Image re-hosting on Hatena Fotolife.

use super::wsse::wsse_header;
use super::MediaRelay;
use crate::api::parser::preview;
use crate::constants::{
    ATOM_XML_NS, DEFAULT_IMAGE_CONTENT_TYPE, FOTOLIFE_IMAGE_TITLE, FOTOLIFE_POST_URL,
    HATENA_XML_NS, LEGACY_ATOM_XML_NS,
};
use crate::types::HatenaCredentials;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{header, Client, StatusCode};
use thiserror::Error;

/// Why a relay attempt produced no token. Logged, never returned.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("image download failed: {0}")]
    Download(#[source] reqwest::Error),

    #[error("image download returned status {0}")]
    DownloadStatus(StatusCode),

    #[error("upload request failed: {0}")]
    Upload(#[source] reqwest::Error),

    #[error("upload rejected with status {status}: {body}")]
    UploadRejected { status: StatusCode, body: String },

    #[error("upload response is not XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("upload response has neither hatena:syntax nor an alternate link: {body}")]
    MissingReference { body: String },
}

/// Downloads images and re-uploads them to the account's Fotolife.
#[derive(Clone)]
pub struct FotolifeRelay {
    client: Client,
    credentials: HatenaCredentials,
    endpoint: String,
}

impl FotolifeRelay {
    pub fn new(client: Client, credentials: HatenaCredentials) -> Self {
        Self::with_endpoint(client, credentials, FOTOLIFE_POST_URL)
    }

    pub fn with_endpoint(client: Client, credentials: HatenaCredentials, endpoint: &str) -> Self {
        Self {
            client,
            credentials,
            endpoint: endpoint.to_string(),
        }
    }

    async fn download(&self, url: &str) -> Result<(Vec<u8>, String), RelayError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RelayError::Download)?;

        if !response.status().is_success() {
            return Err(RelayError::DownloadStatus(response.status()));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
            .to_string();
        let bytes = response.bytes().await.map_err(RelayError::Download)?;

        Ok((bytes.to_vec(), content_type))
    }

    async fn upload(&self, payload: &[u8], content_type: &str) -> Result<String, RelayError> {
        let envelope = build_upload_envelope(payload, content_type);
        let auth = wsse_header(self.credentials.user_id(), self.credentials.api_key());

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-WSSE", auth)
            .body(envelope)
            .send()
            .await
            .map_err(RelayError::Upload)?;

        let status = response.status();
        let body = response.text().await.map_err(RelayError::Upload)?;
        if !status.is_success() {
            return Err(RelayError::UploadRejected {
                status,
                body: preview(&body),
            });
        }

        parse_upload_response(&body)
    }
}

#[async_trait::async_trait]
impl MediaRelay for FotolifeRelay {
    async fn relay(&self, url: &str) -> Option<String> {
        let (payload, content_type) = match self.download(url).await {
            Ok(downloaded) => downloaded,
            Err(e) => {
                log::error!("Failed to download image from {}: {}", url, e);
                return None;
            }
        };
        log::debug!(
            "Downloaded {} bytes ({}) from {}",
            payload.len(),
            content_type,
            url
        );

        match self.upload(&payload, &content_type).await {
            Ok(token) => {
                log::info!("Uploaded image to Fotolife: {}", token);
                Some(token)
            }
            Err(e) => {
                log::error!("Failed to upload image to Fotolife: {}", e);
                None
            }
        }
    }
}

/// The Atom 0.3 entry Fotolife expects, carrying the image as base64.
pub fn build_upload_envelope(payload: &[u8], content_type: &str) -> String {
    format!(
        "<entry xmlns=\"{}\">\n<title>{}</title>\n<content mode=\"base64\" type=\"{}\">{}</content>\n</entry>",
        LEGACY_ATOM_XML_NS,
        FOTOLIFE_IMAGE_TITLE,
        html_escape::encode_double_quoted_attribute(content_type),
        STANDARD.encode(payload)
    )
}

/// Extracts the image reference from an upload response.
///
/// Prefers the `hatena:syntax` token and falls back to the alternate link.
pub fn parse_upload_response(body: &str) -> Result<String, RelayError> {
    let document = roxmltree::Document::parse(body)?;
    let root = document.root_element();

    let syntax = root
        .children()
        .find(|node| node.has_tag_name((HATENA_XML_NS, "syntax")))
        .and_then(|node| node.text())
        .map(str::trim)
        .filter(|text| !text.is_empty());
    if let Some(token) = syntax {
        return Ok(token.to_string());
    }

    let alternate = root
        .children()
        .find(|node| {
            (node.has_tag_name((ATOM_XML_NS, "link"))
                || node.has_tag_name((LEGACY_ATOM_XML_NS, "link")))
                && node.attribute("rel") == Some("alternate")
        })
        .and_then(|node| node.attribute("href"));

    match alternate {
        Some(href) => Ok(href.to_string()),
        None => Err(RelayError::MissingReference {
            body: body.to_string(),
        }),
    }
}
