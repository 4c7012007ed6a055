//! Projections from raw documents into listing and detail models
//!
//! These are pure structural copies. No validation is performed; absent
//! fields stay absent and surface downstream as blanks.

use crate::cms::Document;
use crate::content::post::{
    ContentSection, PostDetail, PostDetailData, PostSummary, PostSummaryData,
};

/// Project a raw document into its listing representation
pub fn summary_from(doc: &Document) -> PostSummary {
    PostSummary {
        uid: doc.uid.clone(),
        first_publication_date: doc.first_publication_date.clone(),
        data: PostSummaryData {
            title: doc.data.title.clone(),
            subtitle: doc.data.subtitle.clone(),
            author: doc.data.author.clone(),
        },
    }
}

/// Project a raw document into its full post representation
pub fn detail_from(doc: &Document) -> PostDetail {
    PostDetail {
        uid: doc.uid.clone(),
        first_publication_date: doc.first_publication_date.clone(),
        data: PostDetailData {
            title: doc.data.title.clone(),
            subtitle: doc.data.subtitle.clone(),
            banner_url: doc.data.banner.as_ref().and_then(|b| b.url.clone()),
            author: doc.data.author.clone(),
            content: doc
                .data
                .content
                .iter()
                .map(|section| ContentSection {
                    heading: section.heading.clone(),
                    body: section.body.clone(),
                })
                .collect(),
        },
    }
}
