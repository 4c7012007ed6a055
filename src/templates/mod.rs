//! Embedded Tera templates for the listing, post and loading pages

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::format_publication_date;

/// Template renderer with embedded templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Rendered rich-text markup is inserted verbatim
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("spacetraveling/layout.html")),
            ("index.html", include_str!("spacetraveling/index.html")),
            ("post.html", include_str!("spacetraveling/post.html")),
            ("loading.html", include_str!("spacetraveling/loading.html")),
        ])?;

        tera.register_filter("post_date", post_date_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Site-wide data for templates
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub root: String,
}

/// One post entry on the listing page
#[derive(Debug, Clone, Serialize)]
pub struct ListingPostData {
    /// Raw ISO-8601 publication date; formatted by the `post_date` filter
    pub date: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    /// Root-joined link to the post page
    pub path: String,
}

/// One rendered section of a post page
#[derive(Debug, Clone, Serialize)]
pub struct SectionData {
    pub heading: String,
    /// Markup produced by the rich-text bridge, inserted verbatim
    pub body_html: String,
}

/// Full post page data
#[derive(Debug, Clone, Serialize)]
pub struct PostPageData {
    pub date: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner_url: String,
    pub reading_minutes: usize,
    pub sections: Vec<SectionData>,
}

/// Tera filter: format an ISO-8601 timestamp as `dd MMM yyyy`
fn post_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let formatted = match value {
        tera::Value::String(raw) => format_publication_date(Some(raw)),
        _ => String::new(),
    };
    Ok(tera::Value::String(formatted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteData {
        SiteData {
            title: "spacetraveling".to_string(),
            description: String::new(),
            root: "/".to_string(),
        }
    }

    #[test]
    fn test_render_listing_with_load_more() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut context = Context::new();
        context.insert("site", &site());
        context.insert(
            "posts",
            &vec![ListingPostData {
                date: Some("2021-03-15T19:25:28+0000".to_string()),
                title: "Como utilizar Hooks".to_string(),
                subtitle: "Pensando em sincronização".to_string(),
                author: "Joseph Oliveira".to_string(),
                path: "/post/como-utilizar-hooks/".to_string(),
            }],
        );
        context.insert("next_page", "https://cdn.example.io/search?page=2");

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains("Como utilizar Hooks"));
        assert!(html.contains("15 mar 2021"));
        assert!(html.contains("/post/como-utilizar-hooks/"));
        assert!(html.contains("Carregar mais posts"));
    }

    #[test]
    fn test_listing_hides_load_more_when_exhausted() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("posts", &Vec::<ListingPostData>::new());
        context.insert("next_page", "");

        let html = renderer.render("index.html", &context).unwrap();
        assert!(!html.contains("Carregar mais posts"));
    }

    #[test]
    fn test_render_post_page() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut context = Context::new();
        context.insert("site", &site());
        context.insert(
            "post",
            &PostPageData {
                date: Some("2021-03-25T19:25:28+0000".to_string()),
                title: "Criando um app do zero".to_string(),
                subtitle: "Tudo sobre como criar a sua primeira aplicação".to_string(),
                author: "Danilo Vieira".to_string(),
                banner_url: "https://images.example.io/banner.png".to_string(),
                reading_minutes: 4,
                sections: vec![SectionData {
                    heading: "Proin et varius".to_string(),
                    body_html: "<p>Lorem ipsum</p>".to_string(),
                }],
            },
        );

        let html = renderer.render("post.html", &context).unwrap();
        assert!(html.contains("Criando um app do zero"));
        assert!(html.contains("25 mar 2021"));
        assert!(html.contains("4 min"));
        assert!(html.contains("<p>Lorem ipsum</p>"));
        assert!(html.contains("https://images.example.io/banner.png"));
    }

    #[test]
    fn test_render_loading_page() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut context = Context::new();
        context.insert("site", &site());

        let html = renderer.render("loading.html", &context).unwrap();
        assert!(html.contains("Carregando..."));
    }
}
