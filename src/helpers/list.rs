//! List helper functions: category summaries, featured/recent split, and
//! the public event filter.

use indexmap::IndexMap;

use crate::content::{BlogPost, CategorySummary, Event};

/// Default cap on featured posts shown on the listing
pub const FEATURED_LIMIT: usize = 3;

/// Default cap on recent (non-featured) posts shown on the listing
pub const RECENT_LIMIT: usize = 6;

/// Count posts per category, in order of first appearance
pub fn category_summaries(posts: &[BlogPost]) -> Vec<CategorySummary> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();

    for post in posts {
        *counts.entry(post.category.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(name, count)| CategorySummary {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Featured and recent posts, split from one collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPartition {
    pub featured: Vec<BlogPost>,
    pub recent: Vec<BlogPost>,
}

/// Split posts into featured and recent with the default caps
pub fn partition_posts(posts: &[BlogPost]) -> PostPartition {
    partition_posts_with_limits(posts, FEATURED_LIMIT, RECENT_LIMIT)
}

/// Split posts into the first `featured_limit` featured posts and the first
/// `recent_limit` non-featured posts, both in input order.
///
/// A short featured side is not padded from the recent side.
pub fn partition_posts_with_limits(
    posts: &[BlogPost],
    featured_limit: usize,
    recent_limit: usize,
) -> PostPartition {
    let featured = posts
        .iter()
        .filter(|p| p.featured)
        .take(featured_limit)
        .cloned()
        .collect();

    let recent = posts
        .iter()
        .filter(|p| !p.featured)
        .take(recent_limit)
        .cloned()
        .collect();

    PostPartition { featured, recent }
}

/// Events visible on the public listing, in input order
pub fn published_events(events: &[Event]) -> Vec<Event> {
    events.iter().filter(|e| e.is_published()).cloned().collect()
}
