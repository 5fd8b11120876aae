// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;

/// API key for Notion API authentication
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Accepts any token that is not blank; Notion judges the rest.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();

        if key.trim().is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short keys would be shown whole, so they stay fully hidden.
        if self.0.chars().count() < REDACTION_MIN_KEY_CHARS {
            return write!(f, "...");
        }
        let visible: String = self.0.chars().take(10).collect();
        write!(f, "{}...", visible)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.to_string()).finish()
    }
}

/// Keys shorter than this are never partially displayed.
const REDACTION_MIN_KEY_CHARS: usize = 20;

/// Hatena account credentials shared by the Fotolife and Blog endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct HatenaCredentials {
    user_id: String,
    blog_id: String,
    api_key: String,
}

impl HatenaCredentials {
    pub fn new(
        user_id: impl Into<String>,
        blog_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (user_id, blog_id, api_key) = (user_id.into(), blog_id.into(), api_key.into());

        if user_id.is_empty() {
            return Err(ValidationError::EmptyField("HATENA_USER_ID"));
        }
        if blog_id.is_empty() {
            return Err(ValidationError::EmptyField("HATENA_BLOG_ID"));
        }
        if api_key.is_empty() {
            return Err(ValidationError::EmptyField("HATENA_API_KEY"));
        }

        Ok(Self {
            user_id,
            blog_id,
            api_key,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn blog_id(&self) -> &str {
        &self.blog_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for HatenaCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HatenaCredentials")
            .field("user_id", &self.user_id)
            .field("blog_id", &self.blog_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Visibility of a newly created blog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishMode {
    #[default]
    Draft,
    Published,
}

impl PublishMode {
    pub fn from_publish_flag(publish: bool) -> Self {
        if publish {
            Self::Published
        } else {
            Self::Draft
        }
    }

    pub fn is_draft(self) -> bool {
        matches!(self, Self::Draft)
    }
}

impl fmt::Display for PublishMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
        }
    }
}

/// A complete markup document ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupDocument(String);

impl MarkupDocument {
    /// Joins rendered segments with a blank line between each pair.
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments.join("\n\n"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MarkupDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
