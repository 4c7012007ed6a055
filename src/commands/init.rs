//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("static/css"))?;
    fs::create_dir_all(target_dir.join("static/img"))?;

    let config_content = r#"# spacetraveling configuration

# Site
title: spacetraveling
subtitle: ''
description: ''
author: John Doe
language: pt-BR

# URL
url: http://example.com
root: /

# Directory
public_dir: public
static_dir: static

# Content service
cms:
  # Base URL of the content API, e.g. https://myrepo.cdn.example.io/api/v2
  api_url: ''
  # access_token: ''
  document_type: post
  fetch_fields:
    - post.title
    - post.subtitle
    - post.author
  # First listing page size (small on purpose, to exercise pagination)
  listing_page_size: 1
  # Page size used when enumerating post paths
  path_page_size: 100
  # Extra listing pages accumulated at build time (0 = first page only)
  max_listing_pages: 0
  timeout_secs: 30
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    let style = r#"body {
  background: #1a1d23;
  color: #f8f8f8;
  font-family: sans-serif;
  max-width: 720px;
  margin: 0 auto;
  padding: 2rem 1rem;
}
a { color: inherit; text-decoration: none; }
.load-more { color: #ff57b2; font-weight: bold; }
.publication-info { margin-right: 1.5rem; color: #bbbbbb; }
"#;

    fs::write(target_dir.join("static/css/style.css"), style)?;

    Ok(())
}
