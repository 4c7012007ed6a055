//! HTTP client for the content service

use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;

use crate::cms::{CmsError, Document, PostPage, Result};
use crate::config::CmsConfig;
use crate::content::listing::PageFetcher;

/// Client for a hosted content repository
///
/// Built from an explicit [`CmsConfig`]; holds no global state.
pub struct CmsClient {
    http: Client,
    api_url: String,
    access_token: Option<String>,
    document_type: String,
    fetch_fields: Vec<String>,
}

impl CmsClient {
    /// Create a client from the given configuration
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("spacetraveling/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            document_type: config.document_type.clone(),
            fetch_fields: config.fetch_fields.clone(),
        })
    }

    /// Query documents of the configured type, projected to the configured
    /// fields, limited to `page_size` results per page
    pub async fn query_documents(&self, page_size: usize) -> Result<PostPage> {
        let predicate = format!(r#"[[at(document.type,"{}")]]"#, self.document_type);
        let fetch = self.fetch_fields.join(",");

        let mut request = self
            .http
            .get(format!("{}/documents/search", self.api_url))
            .query(&[("q", predicate.as_str()), ("fetch", fetch.as_str())])
            .query(&[("pageSize", page_size)]);
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token)]);
        }

        tracing::debug!("Querying documents (pageSize={})", page_size);
        let response = request.send().await?;
        decode_page(response).await
    }

    /// Fetch a single document by its unique slug
    pub async fn get_by_uid(&self, slug: &str) -> Result<Document> {
        let predicate = format!(r#"[[at(my.{}.uid,"{}")]]"#, self.document_type, slug);

        let mut request = self
            .http
            .get(format!("{}/documents/search", self.api_url))
            .query(&[("q", predicate.as_str())])
            .query(&[("pageSize", 1usize)]);
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token)]);
        }

        tracing::debug!("Fetching document by uid: {}", slug);
        let response = request.send().await?;
        let page = decode_page(response).await?;

        page.results
            .into_iter()
            .next()
            .ok_or_else(|| CmsError::NotFound {
                slug: slug.to_string(),
            })
    }

    /// Fetch a page of results from an opaque `next_page` URL
    pub async fn fetch_page(&self, url: &str) -> Result<PostPage> {
        tracing::debug!("Fetching pagination URL: {}", url);
        let response = self.http.get(url).send().await?;
        decode_page(response).await
    }
}

impl PageFetcher for CmsClient {
    async fn fetch_page(&self, url: &str) -> Result<PostPage> {
        CmsClient::fetch_page(self, url).await
    }
}

/// Decode a response body as a page envelope, surfacing non-success statuses
async fn decode_page(response: Response) -> Result<PostPage> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CmsError::Status { status, body });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
