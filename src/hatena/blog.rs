// src/hatena/blog.rs
//! Hatena Blog AtomPub entry creation.

use super::EntryPublisher;
use crate::api::parser::preview;
use crate::constants::{ATOM_XML_NS, HATENA_BLOG_BASE_URL};
use crate::error::AppError;
use crate::types::{HatenaCredentials, MarkupDocument, PublishMode};
use reqwest::{header, Client, StatusCode};

/// What the blog reported back for a created entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub mode: PublishMode,
    /// The `Location` of the new entry's member URI, when sent.
    pub location: Option<String>,
}

/// Posts entries to one blog of one Hatena account.
#[derive(Clone)]
pub struct HatenaBlogClient {
    client: Client,
    credentials: HatenaCredentials,
    base_url: String,
}

impl HatenaBlogClient {
    pub fn new(client: Client, credentials: HatenaCredentials) -> Self {
        Self::with_base_url(client, credentials, HATENA_BLOG_BASE_URL)
    }

    pub fn with_base_url(client: Client, credentials: HatenaCredentials, base_url: &str) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{user}/{blog}/atom/entry`
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}/{}/atom/entry",
            self.base_url,
            self.credentials.user_id(),
            self.credentials.blog_id()
        )
    }
}

#[async_trait::async_trait]
impl EntryPublisher for HatenaBlogClient {
    async fn publish(
        &self,
        title: &str,
        document: &MarkupDocument,
        mode: PublishMode,
    ) -> Result<PublishReceipt, AppError> {
        let body = build_entry_xml(self.credentials.user_id(), title, document.as_str(), mode);
        let url = self.collection_url();
        log::debug!("POST {} ({} bytes, {})", url, body.len(), mode);

        let response = self
            .client
            .post(&url)
            .basic_auth(self.credentials.user_id(), Some(self.credentials.api_key()))
            .header(header::CONTENT_TYPE, "application/xml")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            log::info!("Successfully posted to Hatena Blog as a {}", mode);
            return Ok(PublishReceipt { mode, location });
        }

        let text = response.text().await.unwrap_or_default();
        log::error!(
            "Failed to post to Hatena Blog. Status code: {}",
            status.as_u16()
        );
        log::error!("{}", text);
        Err(AppError::PublishRejected {
            status: status.as_u16(),
            body: preview(&text),
        })
    }
}

/// The AtomPub entry document for a new post.
///
/// `content` goes into a CDATA section verbatim; a literal `]]>` inside it
/// is split across two sections.
pub fn build_entry_xml(user: &str, title: &str, content: &str, mode: PublishMode) -> String {
    let mut xml = String::with_capacity(content.len() + 512);
    xml.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    xml.push_str(&format!(
        "<entry xmlns=\"{}\"\n       xmlns:app=\"http://www.w3.org/2007/app\">\n",
        ATOM_XML_NS
    ));
    xml.push_str(&format!(
        "  <title>{}</title>\n",
        html_escape::encode_text(title)
    ));
    xml.push_str(&format!(
        "  <author><name>{}</name></author>\n",
        html_escape::encode_text(user)
    ));
    xml.push_str(&format!(
        "  <content type=\"text/markdown\"><![CDATA[{}]]></content>\n",
        content.replace("]]>", "]]]]><![CDATA[>")
    ));
    if mode.is_draft() {
        xml.push_str("  <app:control><app:draft>yes</app:draft></app:control>\n");
    }
    xml.push_str("</entry>");
    xml
}
