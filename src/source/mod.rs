//! Content sources - where posts and events come from
//!
//! Pages never talk to the backend directly; they receive a
//! [`ContentSource`] and issue their single fetch through it.

mod file;
mod http;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::content::{BlogPost, Event};

pub use file::FileSource;
pub use http::HttpSource;
pub use memory::MemorySource;

/// Errors raised while fetching content
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid data file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("content source unavailable: {message}")]
    Unavailable { message: String },
}

pub type Result<T> = std::result::Result<T, SourceError>;

/// Data access for the site's pages
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All blog posts, in backend order
    async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>>;

    /// One blog post; `Ok(None)` when no post has this id
    async fn fetch_blog_post_by_id(&self, id: &str) -> Result<Option<BlogPost>>;

    /// All events regardless of status
    async fn fetch_events(&self) -> Result<Vec<Event>>;
}
