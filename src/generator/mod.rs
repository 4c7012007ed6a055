//! Generator module - fetches content and writes the static site
//!
//! Build-time fetch failures are not retried or swallowed: any error
//! propagates and fails the run (the rendered tree is never left half
//! updated silently).

use anyhow::Result;
use std::fs;
use tera::Context;
use walkdir::WalkDir;

use crate::cms::CmsClient;
use crate::content::readtime::estimate_minutes;
use crate::content::{detail_from, ListingAccumulator, PostDetail, PostSummary};
use crate::helpers::{post_path, url_for};
use crate::richtext;
use crate::templates::{
    ListingPostData, PostPageData, SectionData, SiteData, TemplateRenderer,
};
use crate::Spacetraveling;

/// Output location of the fallback loading page, relative to the public dir
pub const FALLBACK_PAGE: &str = "post/_fallback/index.html";

/// Static site generator
pub struct Generator {
    app: Spacetraveling,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(app: &Spacetraveling) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            app: app.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub async fn generate(&self, client: &CmsClient) -> Result<()> {
        fs::create_dir_all(&self.app.public_dir)?;

        self.copy_static_assets()?;

        self.generate_listing_page(client).await?;

        let uids = self.enumerate_post_paths(client).await?;
        let mut posts = Vec::with_capacity(uids.len());
        for uid in &uids {
            let doc = client.get_by_uid(uid).await?;
            posts.push(detail_from(&doc));
        }

        self.generate_post_pages(&posts)?;
        self.generate_search_index(&posts)?;

        self.generate_fallback_page()?;

        Ok(())
    }

    /// Generate the listing page from the first page of results, optionally
    /// accumulating further pages up to the configured limit
    async fn generate_listing_page(&self, client: &CmsClient) -> Result<()> {
        let cms = &self.app.config.cms;

        let first_page = client.query_documents(cms.listing_page_size).await?;
        let mut listing = ListingAccumulator::new(&first_page);

        if cms.max_listing_pages > 0 {
            let loaded = listing.load_all(client, cms.max_listing_pages).await?;
            tracing::info!("Accumulated {} extra listing pages", loaded);
        }

        let html = self.render_listing(listing.posts(), listing.next_page())?;

        let output_path = self.app.public_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::info!(
            "Generated listing with {} posts (next_page: {})",
            listing.posts().len(),
            listing.next_page().unwrap_or("none")
        );

        Ok(())
    }

    /// Enumerate every post uid, walking all pages of results
    async fn enumerate_post_paths(&self, client: &CmsClient) -> Result<Vec<String>> {
        let page_size = self.app.config.cms.path_page_size;

        let mut page = client.query_documents(page_size).await?;
        let mut uids: Vec<String> = page.results.iter().filter_map(|d| d.uid.clone()).collect();

        while let Some(url) = page.next_page_url().map(str::to_string) {
            page = client.fetch_page(&url).await?;
            uids.extend(page.results.iter().filter_map(|d| d.uid.clone()));
        }

        tracing::info!("Enumerated {} post paths", uids.len());
        Ok(uids)
    }

    /// Generate each post page
    fn generate_post_pages(&self, posts: &[PostDetail]) -> Result<()> {
        for detail in posts {
            let html = self.render_post(detail)?;
            let uid = detail.uid.as_deref().unwrap_or_default();

            let output_path = self.app.public_dir.join(post_path(uid)).join("index.html");
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;
            tracing::debug!("Generated post: {:?}", output_path);
        }

        tracing::info!("Generated {} post pages", posts.len());
        Ok(())
    }

    /// Generate search index (JSON)
    fn generate_search_index(&self, posts: &[PostDetail]) -> Result<()> {
        let search_data: Vec<serde_json::Value> =
            posts.iter().map(|p| self.search_entry(p)).collect();

        let output_path = self.app.public_dir.join("search.json");
        let json = serde_json::to_string_pretty(&search_data)?;
        fs::write(&output_path, json)?;
        tracing::info!("Generated search.json");

        Ok(())
    }

    /// One search index entry: title, url and the post's plain text
    fn search_entry(&self, detail: &PostDetail) -> serde_json::Value {
        let text = detail
            .data
            .content
            .iter()
            .map(|section| {
                let body = richtext::as_text(&section.body);
                if section.heading.is_empty() {
                    body
                } else {
                    format!("{} {}", section.heading, body)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        serde_json::json!({
            "title": detail.data.title.clone().unwrap_or_default(),
            "url": url_for(
                &self.app.config,
                &post_path(detail.uid.as_deref().unwrap_or_default()),
            ),
            "text": text,
            "date": detail.first_publication_date.clone().unwrap_or_default(),
        })
    }

    /// Generate the fallback loading page for not-yet-generated post routes
    fn generate_fallback_page(&self) -> Result<()> {
        let mut context = Context::new();
        context.insert("site", &self.site_data());
        let html = self.renderer.render("loading.html", &context)?;

        let output_path = self.app.public_dir.join(FALLBACK_PAGE);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;

        Ok(())
    }

    /// Render the listing page markup
    pub fn render_listing(
        &self,
        posts: &[PostSummary],
        next_page: Option<&str>,
    ) -> Result<String> {
        let post_data: Vec<ListingPostData> = posts
            .iter()
            .map(|p| ListingPostData {
                date: p.first_publication_date.clone(),
                title: p.data.title.clone().unwrap_or_default(),
                subtitle: p.data.subtitle.clone().unwrap_or_default(),
                author: p.data.author.clone().unwrap_or_default(),
                path: url_for(
                    &self.app.config,
                    &post_path(p.uid.as_deref().unwrap_or_default()),
                ),
            })
            .collect();

        let mut context = Context::new();
        context.insert("site", &self.site_data());
        context.insert("posts", &post_data);
        context.insert("next_page", &next_page.unwrap_or_default());

        self.renderer.render("index.html", &context)
    }

    /// Render a post page's markup
    pub fn render_post(&self, detail: &PostDetail) -> Result<String> {
        let sections: Vec<SectionData> = detail
            .data
            .content
            .iter()
            .map(|section| SectionData {
                heading: section.heading.clone(),
                body_html: richtext::as_html(&section.body),
            })
            .collect();

        let page = PostPageData {
            date: detail.first_publication_date.clone(),
            title: detail.data.title.clone().unwrap_or_default(),
            subtitle: detail.data.subtitle.clone().unwrap_or_default(),
            author: detail.data.author.clone().unwrap_or_default(),
            banner_url: detail.data.banner_url.clone().unwrap_or_default(),
            reading_minutes: estimate_minutes(&detail.data.content),
            sections,
        };

        let mut context = Context::new();
        context.insert("site", &self.site_data());
        context.insert("post", &page);

        self.renderer.render("post.html", &context)
    }

    fn site_data(&self) -> SiteData {
        SiteData {
            title: self.app.config.title.clone(),
            description: self.app.config.description.clone(),
            root: self.app.config.root.clone(),
        }
    }

    /// Copy static assets (css, images) into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.app.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() {
                let relative = path.strip_prefix(static_dir)?;
                let dest = self.app.public_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::Document;
    use crate::content::summary_from;

    fn test_generator() -> Generator {
        let dir = tempfile::tempdir().unwrap();
        let app = Spacetraveling::new(dir.path()).unwrap();
        Generator::new(&app).unwrap()
    }

    fn sample_document() -> Document {
        serde_json::from_str(
            r#"{
                "uid": "como-utilizar-hooks",
                "first_publication_date": "2021-03-15T19:25:28+0000",
                "data": {
                    "title": "Como utilizar Hooks",
                    "subtitle": "Pensando em sincronização",
                    "author": "Joseph Oliveira",
                    "banner": { "url": "https://images.example.io/banner.png" },
                    "content": [
                        {
                            "heading": "Proin et varius",
                            "body": [ { "type": "paragraph", "text": "Lorem ipsum dolor" } ]
                        }
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_listing_links_and_control() {
        let generator = test_generator();
        let summary = summary_from(&sample_document());

        let html = generator
            .render_listing(&[summary], Some("https://cdn.example.io/page2"))
            .unwrap();
        assert!(html.contains("Como utilizar Hooks"));
        assert!(html.contains("/post/como-utilizar-hooks/"));
        assert!(html.contains("Carregar mais posts"));

        let summary = summary_from(&sample_document());
        let html = generator.render_listing(&[summary], None).unwrap();
        assert!(!html.contains("Carregar mais posts"));
    }

    #[test]
    fn test_search_entry_uses_plain_text() {
        let generator = test_generator();
        let detail = detail_from(&sample_document());

        let entry = generator.search_entry(&detail);
        assert_eq!(entry["title"], "Como utilizar Hooks");
        assert_eq!(entry["url"], "/post/como-utilizar-hooks/");
        // Headings and body text, no markup
        assert_eq!(entry["text"], "Proin et varius Lorem ipsum dolor");
    }

    #[test]
    fn test_render_post_includes_reading_time() {
        let generator = test_generator();
        let detail = detail_from(&sample_document());

        let html = generator.render_post(&detail).unwrap();
        // 2 heading tokens + 3 body tokens = 5 words, ceil(5/200) = 1
        assert!(html.contains("1 min"));
        assert!(html.contains("15 mar 2021"));
        assert!(html.contains("<p>Lorem ipsum dolor</p>"));
    }
}
