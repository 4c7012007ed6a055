//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Relative path of a post page for the given slug
///
/// # Examples
/// ```ignore
/// post_path("my-first-post") // -> "post/my-first-post/"
/// ```
pub fn post_path(uid: &str) -> String {
    format!("post/{}/", slug::slugify(uid))
}
