// src/constants.rs
//! Domain constants that define the operational boundaries of the system.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Base URL of the Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Whole-request timeout for every HTTP call the tool makes.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// How many children the Notion API returns per listing page.
///
/// The Notion API maximum is 100.
pub const NOTION_API_PAGE_SIZE: usize = 100;

// ---------------------------------------------------------------------------
// Hatena endpoints
// ---------------------------------------------------------------------------

/// Hatena Fotolife AtomPub upload endpoint.
pub const FOTOLIFE_POST_URL: &str = "https://f.hatena.ne.jp/atom/post";

/// Hatena Blog AtomPub host; the entry collection lives under
/// `/{user}/{blog}/atom/entry`.
pub const HATENA_BLOG_BASE_URL: &str = "https://blog.hatena.ne.jp";

/// Title given to every image uploaded to Fotolife.
pub const FOTOLIFE_IMAGE_TITLE: &str = "image";

/// Content type assumed when an image download reports none.
pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

// ---------------------------------------------------------------------------
// XML namespaces
// ---------------------------------------------------------------------------

/// Hatena's vendor namespace; holds the `syntax` element of an upload.
pub const HATENA_XML_NS: &str = "http://www.hatena.ne.jp/info/xmlns#";

/// Atom 1.0.
pub const ATOM_XML_NS: &str = "http://www.w3.org/2005/Atom";

/// Atom 0.3, still spoken by the Fotolife endpoint.
pub const LEGACY_ATOM_XML_NS: &str = "http://purl.org/atom/ns#";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Icon shown for a callout without an emoji icon.
pub const DEFAULT_CALLOUT_EMOJI: &str = "📣";

/// Maximum characters shown when logging error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
