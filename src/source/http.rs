//! Content backend over HTTP

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{ContentSource, Result, SourceError};
use crate::config::BackendConfig;
use crate::content::{BlogPost, Event};
use crate::helpers::encode_segment;

/// Fetches posts and events from a JSON HTTP backend
///
/// - `GET {base_url}{posts_path}` returns an array of posts
/// - `GET {base_url}{posts_path}/{id}` returns one post, `null`, or 404
/// - `GET {base_url}{events_path}` returns an array of events
pub struct HttpSource {
    client: Client,
    base_url: String,
    posts_path: String,
    events_path: String,
    api_key: Option<String>,
}

impl HttpSource {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("site-pages/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            posts_path: normalize_path(&config.posts_path),
            events_path: normalize_path(&config.events_path),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { status, url });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>> {
        let posts: Vec<BlogPost> = self.get_json(self.url(&self.posts_path)).await?;
        tracing::debug!("Fetched {} blog posts", posts.len());
        Ok(posts)
    }

    async fn fetch_blog_post_by_id(&self, id: &str) -> Result<Option<BlogPost>> {
        let url = self.url(&format!("{}/{}", self.posts_path, encode_segment(id)));
        match self.get_json::<Option<BlogPost>>(url).await {
            Err(SourceError::Status {
                status: StatusCode::NOT_FOUND,
                ..
            }) => Ok(None),
            other => other,
        }
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        let events: Vec<Event> = self.get_json(self.url(&self.events_path)).await?;
        tracing::debug!("Fetched {} events", events.len());
        Ok(events)
    }
}
