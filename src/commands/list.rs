//! List remote content

use anyhow::Result;

use crate::content::ListingAccumulator;
use crate::helpers::format_publication_date;
use crate::Spacetraveling;

/// List remote content by type
pub async fn run(app: &Spacetraveling, content_type: &str) -> Result<()> {
    let client = app.client()?;

    match content_type {
        "post" | "posts" => {
            // Walk every page through the accumulator
            let first_page = client
                .query_documents(app.config.cms.path_page_size)
                .await?;
            let mut listing = ListingAccumulator::new(&first_page);
            listing.load_all(&client, 0).await?;

            println!("Posts ({}):", listing.posts().len());
            for post in listing.posts() {
                println!(
                    "  {} - {} [{}]",
                    format_publication_date(post.first_publication_date.as_deref()),
                    post.data.title.as_deref().unwrap_or("(untitled)"),
                    post.uid.as_deref().unwrap_or("-")
                );
            }
        }
        "path" | "paths" => {
            let mut page = client
                .query_documents(app.config.cms.path_page_size)
                .await?;
            let mut uids: Vec<String> =
                page.results.iter().filter_map(|d| d.uid.clone()).collect();
            while let Some(url) = page.next_page_url().map(str::to_string) {
                page = client.fetch_page(&url).await?;
                uids.extend(page.results.iter().filter_map(|d| d.uid.clone()));
            }

            println!("Paths ({}):", uids.len());
            for uid in uids {
                println!("  post/{}/", uid);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, path", content_type);
        }
    }

    Ok(())
}
