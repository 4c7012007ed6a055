//! Content module - post models, mappers, listing accumulation and
//! reading-time estimation

pub mod listing;
mod mapper;
mod post;
pub mod readtime;

pub use listing::{ListingAccumulator, LoadOutcome};
pub use mapper::{detail_from, summary_from};
pub use post::{ContentSection, PostDetail, PostDetailData, PostSummary, PostSummaryData};
