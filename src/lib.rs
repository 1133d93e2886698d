//! site-pages: blog and events pages for a marketing site
//!
//! Content comes from a backend through a [`source::ContentSource`]. Each
//! page issues a single fetch, derives its view (category summaries,
//! featured/recent split, published events) and renders it with the
//! embedded Tera templates, either on demand from the server or ahead of
//! time with `generate`.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod i18n;
pub mod page;
pub mod server;
pub mod source;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use source::{ContentSource, FileSource, HttpSource};

/// The site: configuration plus the directories it works in
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// UI strings
    pub i18n: i18n::I18n,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let mut i18n = i18n::I18n::new(&config.language);
        i18n.load_languages(base_dir.join(&config.i18n_dir))?;

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            i18n,
        })
    }

    /// Pick the content source: a local data directory when given,
    /// otherwise the configured backend
    pub fn source(&self, data_dir: Option<&Path>) -> Result<Arc<dyn ContentSource>> {
        match data_dir {
            Some(dir) => {
                let dir = if dir.is_absolute() {
                    dir.to_path_buf()
                } else {
                    self.base_dir.join(dir)
                };
                tracing::debug!("Reading content from {:?}", dir);
                Ok(Arc::new(FileSource::new(dir)))
            }
            None => {
                tracing::debug!("Fetching content from {}", self.config.backend.base_url);
                Ok(Arc::new(HttpSource::new(&self.config.backend)?))
            }
        }
    }

    /// Build the page renderer for this site
    pub fn renderer(&self) -> Result<templates::TemplateRenderer> {
        templates::TemplateRenderer::new(self.config.clone(), self.i18n.clone())
    }

    /// Render every page into the public directory
    pub async fn generate(&self, source: Arc<dyn ContentSource>) -> Result<()> {
        commands::generate::run(self, source).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
