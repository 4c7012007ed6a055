//! Configuration module

mod site;

pub use site::{CmsConfig, SiteConfig};
