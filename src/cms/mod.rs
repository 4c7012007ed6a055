//! Content service client
//!
//! The content-management API is treated as a black box: documents of a
//! configured type are queried with a predicate, a field projection and a
//! page size, and pagination is driven by the opaque `next_page` URL the
//! service hands back.

mod client;
mod document;

pub use client::CmsClient;
pub use document::{Banner, Document, DocumentData, PostPage, RawSection, RichTextBlock};

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for all content service operations.
#[derive(Debug, Error)]
pub enum CmsError {
    /// Underlying HTTP client error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// HTTP response returned a non-success status with body.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// No document exists for the requested slug.
    #[error("document not found: {slug}")]
    NotFound { slug: String },
    /// Response body could not be decoded as a document page.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for content service operations.
pub type Result<T> = std::result::Result<T, CmsError>;
