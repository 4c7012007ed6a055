//! Wire types for documents returned by the content service
//!
//! These structs mirror the service's JSON shapes. Nothing is validated:
//! absent fields deserialize to `None` or an empty default and pass through
//! to the mappers untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One page of query results, with a pointer to the next page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPage {
    /// Opaque URL of the next page, absent or empty when exhausted
    #[serde(default)]
    pub next_page: Option<String>,
    /// Documents in this page, in service order
    #[serde(default)]
    pub results: Vec<Document>,
}

impl PostPage {
    /// The next page URL, treating an empty string as exhausted
    pub fn next_page_url(&self) -> Option<&str> {
        self.next_page.as_deref().filter(|url| !url.is_empty())
    }
}

/// A raw document snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Slug-like identifier; absent for unpublished states
    #[serde(default)]
    pub uid: Option<String>,
    /// ISO-8601 publication timestamp, null until published
    #[serde(default)]
    pub first_publication_date: Option<String>,
    /// Typed field bag
    #[serde(default)]
    pub data: DocumentData,
}

/// The `data` bag of a post document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub banner: Option<Banner>,
    #[serde(default)]
    pub content: Vec<RawSection>,
}

/// Banner image reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default)]
    pub url: Option<String>,
}

/// One content section: a heading plus rich-text body blocks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: Vec<RichTextBlock>,
}

/// An opaque rich-text block
///
/// The block schema is owned by the content service; only `type` and `text`
/// are interpreted here. Everything else (spans, image metadata, embeds)
/// rides along in `extra` so rendering can be delegated without loss.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
