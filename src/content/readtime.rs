//! Reading-time estimation
//!
//! Words are counted by splitting on a single literal space, not general
//! whitespace. That means an empty heading still counts as one token and
//! consecutive spaces produce empty tokens; both are kept as-is so the
//! displayed minute values stay reproducible against existing content.

use crate::content::post::ContentSection;

/// Assumed reading speed in words per minute
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate minutes-to-read for a post's sections
///
/// Returns `ceil(total_words / 200)`; an empty section list yields 0.
pub fn estimate_minutes(content: &[ContentSection]) -> usize {
    let total_words: usize = content
        .iter()
        .map(|section| {
            let heading_words = section.heading.split(' ').count();
            let body_words: usize = section
                .body
                .iter()
                .map(|block| block.text.split(' ').count())
                .sum();
            heading_words + body_words
        })
        .sum();

    total_words.div_ceil(WORDS_PER_MINUTE)
}
