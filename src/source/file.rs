//! Content source backed by local data files

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use super::{ContentSource, Result};
use crate::content::{BlogPost, Event};

/// Reads posts and events from `posts.{json,yml,yaml}` and
/// `events.{json,yml,yaml}` in a data directory
///
/// Files are read on every fetch, so edits show up without a restart.
/// A missing file yields an empty collection.
pub struct FileSource {
    data_dir: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// First existing `{stem}.json|yml|yaml` in the data directory
    fn find(&self, stem: &str) -> Option<PathBuf> {
        ["json", "yml", "yaml"]
            .iter()
            .map(|ext| self.data_dir.join(format!("{}.{}", stem, ext)))
            .find(|path| path.is_file())
    }

    async fn load<T: DeserializeOwned>(&self, stem: &str) -> Result<Vec<T>> {
        let Some(path) = self.find(stem) else {
            tracing::debug!("No {} file in {:?}", stem, self.data_dir);
            return Ok(Vec::new());
        };

        let content = tokio::fs::read_to_string(&path).await?;
        let items = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        tracing::debug!("Loaded data file: {:?}", path);
        Ok(items)
    }
}

#[async_trait]
impl ContentSource for FileSource {
    async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.load("posts").await
    }

    async fn fetch_blog_post_by_id(&self, id: &str) -> Result<Option<BlogPost>> {
        let posts: Vec<BlogPost> = self.load("posts").await?;
        Ok(posts.into_iter().find(|p| p.id == id))
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        self.load("events").await
    }
}
