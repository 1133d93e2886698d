//! In-memory content source

use async_trait::async_trait;

use super::{ContentSource, Result, SourceError};
use crate::content::{BlogPost, Event};

/// Serves a fixed set of posts and events
///
/// Built with [`MemorySource::failing`], every fetch fails instead.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    posts: Vec<BlogPost>,
    events: Vec<Event>,
    failure: Option<String>,
}

impl MemorySource {
    pub fn new(posts: Vec<BlogPost>, events: Vec<Event>) -> Self {
        Self {
            posts,
            events,
            failure: None,
        }
    }

    /// A source whose fetches all fail with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(SourceError::Unavailable {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.check()?;
        Ok(self.posts.clone())
    }

    async fn fetch_blog_post_by_id(&self, id: &str) -> Result<Option<BlogPost>> {
        self.check()?;
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        self.check()?;
        Ok(self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_by_id() {
        let source = MemorySource::new(vec![BlogPost::new("a", "A")], Vec::new());
        assert!(source.fetch_blog_post_by_id("a").await.unwrap().is_some());
        assert!(source.fetch_blog_post_by_id("b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failing_source() {
        let source = MemorySource::failing("backend down");
        assert!(source.fetch_blog_posts().await.is_err());
        assert!(source.fetch_blog_post_by_id("a").await.is_err());
        assert!(source.fetch_events().await.is_err());
    }
}
