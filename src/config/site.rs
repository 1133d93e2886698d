//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Icon used for categories that have no entry in `category_icons`
pub const DEFAULT_CATEGORY_ICON: &str = "trending-up";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
    pub i18n_dir: String,

    // Content backend
    #[serde(default)]
    pub backend: BackendConfig,

    // Blog listing
    #[serde(default)]
    pub blog: BlogConfig,

    // Category label -> icon name
    #[serde(default = "default_category_icons")]
    pub category_icons: IndexMap<String, String>,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Insights".to_string(),
            description: String::new(),
            language: "en".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
            i18n_dir: "languages".to_string(),

            backend: BackendConfig::default(),
            blog: BlogConfig::default(),
            category_icons: default_category_icons(),
            server: ServerConfig::default(),

        }
    }
}

fn default_category_icons() -> IndexMap<String, String> {
    [
        ("Digital Marketing", "trending-up"),
        ("AI & Technology", "brain"),
        ("Business Growth", "target"),
        ("Success Stories", "users"),
    ]
    .into_iter()
    .map(|(label, icon)| (label.to_string(), icon.to_string()))
    .collect()
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Icon name for a category label
    pub fn category_icon(&self, category: &str) -> &str {
        self.category_icons
            .get(category)
            .map(String::as_str)
            .unwrap_or(DEFAULT_CATEGORY_ICON)
    }
}

/// Content backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub posts_path: String,
    pub events_path: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            posts_path: "/blog_posts".to_string(),
            events_path: "/events".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

/// Blog listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub featured_limit: usize,
    pub recent_limit: usize,
    pub render_markdown: bool,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            featured_limit: 3,
            recent_limit: 6,
            render_markdown: false,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Insights");
        assert_eq!(config.blog.featured_limit, 3);
        assert_eq!(config.blog.recent_limit, 6);
        assert_eq!(config.backend.posts_path, "/blog_posts");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Growth Hub
backend:
  base_url: https://api.example.com
  api_key: secret
blog:
  render_markdown: true
server:
  port: 8000
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Growth Hub");
        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.backend.api_key.as_deref(), Some("secret"));
        // Unspecified nested fields keep their defaults
        assert_eq!(config.backend.events_path, "/events");
        assert!(config.blog.render_markdown);
        assert_eq!(config.blog.featured_limit, 3);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.ip, "localhost");
    }

    #[test]
    fn test_category_icon() {
        let config = SiteConfig::default();
        assert_eq!(config.category_icon("AI & Technology"), "brain");
        assert_eq!(config.category_icon("Success Stories"), "users");
        assert_eq!(config.category_icon("Something New"), DEFAULT_CATEGORY_ICON);
        // Labels are matched exactly
        assert_eq!(config.category_icon("ai & technology"), DEFAULT_CATEGORY_ICON);
    }

    #[test]
    fn test_custom_category_icons_replace_defaults() {
        let yaml = r#"
category_icons:
  Workshops: calendar
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.category_icon("Workshops"), "calendar");
        assert_eq!(config.category_icon("AI & Technology"), DEFAULT_CATEGORY_ICON);
    }
}
