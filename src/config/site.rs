//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
    pub static_dir: String,

    // Content service
    pub cms: CmsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "spacetraveling".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "pt-BR".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            cms: CmsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Content service configuration
///
/// Passed explicitly into [`crate::cms::CmsClient::new`]; there is no
/// process-wide client state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Base URL of the content API, e.g. `https://myrepo.cdn.example.io/api/v2`
    pub api_url: String,
    /// Optional access token sent with every request
    pub access_token: Option<String>,
    /// Document type queried for posts
    pub document_type: String,
    /// Field projection requested for listing queries
    pub fetch_fields: Vec<String>,
    /// Page size of the first listing page
    pub listing_page_size: usize,
    /// Page size used when enumerating post paths
    pub path_page_size: usize,
    /// Extra listing pages accumulated at build time (0 = first page only)
    pub max_listing_pages: usize,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            access_token: None,
            document_type: "post".to_string(),
            fetch_fields: vec![
                "post.title".to_string(),
                "post.subtitle".to_string(),
                "post.author".to_string(),
            ],
            listing_page_size: 1,
            path_page_size: 100,
            max_listing_pages: 0,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "spacetraveling");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.cms.document_type, "post");
        assert_eq!(config.cms.listing_page_size, 1);
        assert_eq!(config.cms.path_page_size, 100);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
cms:
  api_url: https://myrepo.cdn.example.io/api/v2
  listing_page_size: 5
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.cms.api_url, "https://myrepo.cdn.example.io/api/v2");
        assert_eq!(config.cms.listing_page_size, 5);
        // Untouched fields keep their defaults
        assert_eq!(config.cms.path_page_size, 100);
        assert_eq!(config.cms.fetch_fields.len(), 3);
    }
}
