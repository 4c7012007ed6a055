//! Post listing and detail models
//!
//! All of these are read-only snapshots of a remote document at fetch time.
//! Sequences keep their source order: listing order is pagination order,
//! section order is authoring order.

use serde::{Deserialize, Serialize};

use crate::cms::RichTextBlock;

/// Minimal listing representation of a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    /// Slug-like identifier; absent for unpublished states
    pub uid: Option<String>,
    /// ISO-8601 publication timestamp, null until published
    pub first_publication_date: Option<String>,
    pub data: PostSummaryData,
}

/// Listing fields of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostSummaryData {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
}

/// Full representation of a single post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub data: PostDetailData,
}

/// Detail fields of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDetailData {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Banner image URL
    pub banner_url: Option<String>,
    pub author: Option<String>,
    /// Sections in authoring order
    pub content: Vec<ContentSection>,
}

/// One section of a post: a heading plus rich-text body blocks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSection {
    /// Section heading, may be empty
    pub heading: String,
    /// Rich-text body blocks, owned exclusively by this section
    pub body: Vec<RichTextBlock>,
}
