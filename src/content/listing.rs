//! Listing accumulation
//!
//! The listing starts from the first server-fetched page and grows by
//! appending one page of results at a time. Relative order of earlier pages
//! is never disturbed: new results always land after everything already
//! held.

use crate::cms::{self, PostPage};
use crate::content::mapper::summary_from;
use crate::content::post::PostSummary;

/// Source of pagination pages, keyed by the opaque `next_page` URL
///
/// [`crate::cms::CmsClient`] is the production implementation; tests drive
/// the accumulator with scripted pages instead.
pub trait PageFetcher {
    fn fetch_page(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = cms::Result<PostPage>>;
}

/// Outcome of a [`ListingAccumulator::load_more`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many summaries were appended to the end of the listing
    Appended(usize),
    /// There was no next page to load
    Exhausted,
}

/// Accumulates post summaries across pagination fetches
///
/// `load_more` takes `&mut self`, so overlapping loads are unrepresentable:
/// the exclusive borrow is the in-flight guard. A failed fetch returns the
/// error and leaves both the listing and the next-page pointer untouched.
#[derive(Debug, Clone)]
pub struct ListingAccumulator {
    posts: Vec<PostSummary>,
    next_page: Option<String>,
}

impl ListingAccumulator {
    /// Initialize from the first page of results
    pub fn new(first_page: &PostPage) -> Self {
        Self {
            posts: first_page.results.iter().map(summary_from).collect(),
            next_page: first_page.next_page_url().map(str::to_string),
        }
    }

    /// Fetch the next page and append its results to the listing
    pub async fn load_more<F: PageFetcher>(
        &mut self,
        fetcher: &F,
    ) -> cms::Result<LoadOutcome> {
        let Some(url) = self.next_page.clone() else {
            return Ok(LoadOutcome::Exhausted);
        };

        let page = fetcher.fetch_page(&url).await?;

        let added = page.results.len();
        self.posts.extend(page.results.iter().map(summary_from));
        self.next_page = page.next_page_url().map(str::to_string);

        tracing::debug!("Appended {} posts (total {})", added, self.posts.len());
        Ok(LoadOutcome::Appended(added))
    }

    /// Keep loading pages until exhausted or `max_pages` further pages were
    /// fetched (0 = no limit)
    pub async fn load_all<F: PageFetcher>(
        &mut self,
        fetcher: &F,
        max_pages: usize,
    ) -> cms::Result<usize> {
        let mut loaded = 0;
        while self.has_more() {
            if max_pages > 0 && loaded >= max_pages {
                break;
            }
            match self.load_more(fetcher).await? {
                LoadOutcome::Appended(_) => loaded += 1,
                LoadOutcome::Exhausted => break,
            }
        }
        Ok(loaded)
    }

    /// Whether a further page can be loaded
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Accumulated summaries, in pagination order
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Pending next-page URL, if any
    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::CmsError;
    use std::collections::HashMap;

    /// Serves pages from a fixed url -> page map
    struct ScriptedFetcher {
        pages: HashMap<String, PostPage>,
    }

    impl PageFetcher for ScriptedFetcher {
        async fn fetch_page(&self, url: &str) -> cms::Result<PostPage> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| CmsError::NotFound {
                    slug: url.to_string(),
                })
        }
    }

    /// Always fails
    struct FailingFetcher;

    impl PageFetcher for FailingFetcher {
        async fn fetch_page(&self, url: &str) -> cms::Result<PostPage> {
            Err(CmsError::NotFound {
                slug: url.to_string(),
            })
        }
    }

    fn page(uids: &[&str], next: Option<&str>) -> PostPage {
        serde_json::from_value(serde_json::json!({
            "next_page": next,
            "results": uids
                .iter()
                .map(|uid| serde_json::json!({
                    "uid": uid,
                    "first_publication_date": "2021-03-15T19:25:28+0000",
                    "data": { "title": uid, "subtitle": "", "author": "a" }
                }))
                .collect::<Vec<_>>(),
        }))
        .unwrap()
    }

    fn uids(acc: &ListingAccumulator) -> Vec<&str> {
        acc.posts()
            .iter()
            .map(|p| p.uid.as_deref().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_sequential_loads_concatenate_in_order() {
        let fetcher = ScriptedFetcher {
            pages: HashMap::from([
                ("url1".to_string(), page(&["post-b", "post-c"], Some("url2"))),
                ("url2".to_string(), page(&["post-d"], None)),
            ]),
        };

        let mut acc = ListingAccumulator::new(&page(&["post-a"], Some("url1")));
        assert_eq!(uids(&acc), vec!["post-a"]);
        assert!(acc.has_more());

        assert_eq!(
            acc.load_more(&fetcher).await.unwrap(),
            LoadOutcome::Appended(2)
        );
        assert_eq!(uids(&acc), vec!["post-a", "post-b", "post-c"]);
        assert_eq!(acc.next_page(), Some("url2"));

        assert_eq!(
            acc.load_more(&fetcher).await.unwrap(),
            LoadOutcome::Appended(1)
        );
        assert_eq!(uids(&acc), vec!["post-a", "post-b", "post-c", "post-d"]);
        assert!(!acc.has_more());
    }

    #[tokio::test]
    async fn test_load_more_when_exhausted() {
        let mut acc = ListingAccumulator::new(&page(&["post-a"], None));
        let outcome = acc.load_more(&FailingFetcher).await.unwrap();
        assert_eq!(outcome, LoadOutcome::Exhausted);
        assert_eq!(uids(&acc), vec!["post-a"]);
    }

    #[tokio::test]
    async fn test_empty_next_page_string_counts_as_exhausted() {
        let acc = ListingAccumulator::new(&page(&["post-a"], Some("")));
        assert!(!acc.has_more());
        assert_eq!(acc.next_page(), None);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_state_unchanged() {
        let mut acc = ListingAccumulator::new(&page(&["post-a"], Some("url1")));

        let err = acc.load_more(&FailingFetcher).await.unwrap_err();
        assert!(matches!(err, CmsError::NotFound { .. }));

        assert_eq!(uids(&acc), vec!["post-a"]);
        assert_eq!(acc.next_page(), Some("url1"));
        assert!(acc.has_more());
    }

    #[tokio::test]
    async fn test_load_all_respects_page_limit() {
        let fetcher = ScriptedFetcher {
            pages: HashMap::from([
                ("url1".to_string(), page(&["post-b"], Some("url2"))),
                ("url2".to_string(), page(&["post-c"], Some("url3"))),
                ("url3".to_string(), page(&["post-d"], None)),
            ]),
        };

        let mut acc = ListingAccumulator::new(&page(&["post-a"], Some("url1")));
        let loaded = acc.load_all(&fetcher, 2).await.unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(uids(&acc), vec!["post-a", "post-b", "post-c"]);
        assert_eq!(acc.next_page(), Some("url3"));

        let loaded = acc.load_all(&fetcher, 0).await.unwrap();
        assert_eq!(loaded, 1);
        assert!(!acc.has_more());
        assert_eq!(uids(&acc), vec!["post-a", "post-b", "post-c", "post-d"]);
    }
}
