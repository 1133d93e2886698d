//! Blog listing page

use std::sync::Arc;

use super::{PageError, PageLoad};
use crate::config::BlogConfig;
use crate::content::{BlogPost, CategorySummary};
use crate::helpers::{category_summaries, partition_posts_with_limits};
use crate::source::ContentSource;

/// Everything the blog listing shows, derived from one fetch
#[derive(Debug, Clone, PartialEq)]
pub struct BlogListView {
    pub categories: Vec<CategorySummary>,
    pub featured: Vec<BlogPost>,
    pub recent: Vec<BlogPost>,
    /// Number of posts fetched
    pub total: usize,
}

impl BlogListView {
    pub fn derive(posts: &[BlogPost], config: &BlogConfig) -> Self {
        let split = partition_posts_with_limits(posts, config.featured_limit, config.recent_limit);
        Self {
            categories: category_summaries(posts),
            featured: split.featured,
            recent: split.recent,
            total: posts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Mount the page: fetch all posts once, then derive
    pub fn mount<S>(source: Arc<S>, config: BlogConfig) -> PageLoad<Self>
    where
        S: ContentSource + ?Sized + 'static,
    {
        PageLoad::mount(async move {
            let posts = source.fetch_blog_posts().await.map_err(PageError::from)?;
            Ok(Self::derive(&posts, &config))
        })
    }
}
