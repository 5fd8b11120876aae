use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use url::Url;
use uuid::Uuid;

/// Exactly 32 hexadecimal characters, either case.
static NOTION_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-fA-F0-9]{32}$").expect("Notion ID regex is valid - this is a bug in the code")
});

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMarker;

/// Type aliases for specific ID types
pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;

impl<T> Id<T> {
    /// Parses user input: either a raw 32-character hex ID or a URL whose
    /// last hyphen-delimited path segment is one.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let candidate = extract_candidate(input)?;
        if NOTION_ID_PATTERN.is_match(&candidate) {
            Ok(Self::from_normalized(candidate))
        } else {
            Err(ValidationError::InvalidId(input.to_string()))
        }
    }

    /// Accepts an ID as the Notion API reports it (usually hyphenated).
    pub fn from_api(value: &str) -> Result<Self, ValidationError> {
        let compact = value.replace('-', "");
        if NOTION_ID_PATTERN.is_match(&compact) {
            Ok(Self::from_normalized(compact.to_lowercase()))
        } else {
            Err(ValidationError::InvalidId(value.to_string()))
        }
    }

    /// Create an ID from an already normalized string (internal use)
    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Create a new random v4 UUID ID
    pub fn new_v4() -> Self {
        Self::from_normalized(Uuid::new_v4().as_simple().to_string())
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the ID with dashes for API calls
    pub fn to_dashed(&self) -> String {
        if self.value.len() == 32 && !self.value.contains('-') {
            format!(
                "{}-{}-{}-{}-{}",
                &self.value[0..8],
                &self.value[8..12],
                &self.value[12..16],
                &self.value[16..20],
                &self.value[20..32]
            )
        } else {
            self.value.clone()
        }
    }
}

impl PageId {
    /// A page is also the root block of its own content tree.
    pub fn as_block_id(&self) -> BlockId {
        BlockId::from_normalized(self.value.clone())
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_normalized(value))
    }
}

/// Picks the part of the input that should hold the ID.
///
/// URLs contribute the last hyphen-delimited segment of their path, with
/// surrounding slashes stripped; anything else is taken verbatim.
fn extract_candidate(input: &str) -> Result<String, ValidationError> {
    if !input.starts_with("http") {
        return Ok(input.to_string());
    }

    let url = Url::parse(input).map_err(|_| ValidationError::InvalidId(input.to_string()))?;
    let path = url.path().trim_matches('/');
    Ok(path.rsplit('-').next().unwrap_or(path).to_string())
}
