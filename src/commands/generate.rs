//! Generate static pages

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::helpers::encode_segment;
use crate::page::{BlogListView, EventsView, LoadState, PostView};
use crate::source::ContentSource;
use crate::Site;

/// Fetch all content once and render every page into the public directory
///
/// A rejected fetch aborts generation before anything is written.
pub async fn run(site: &Site, source: Arc<dyn ContentSource>) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = source
        .fetch_blog_posts()
        .await
        .context("Failed to fetch blog posts")?;
    let events = source
        .fetch_events()
        .await
        .context("Failed to fetch events")?;

    tracing::info!("Loaded {} posts and {} events", posts.len(), events.len());

    let renderer = site.renderer()?;
    let blog_config = &site.config.blog;
    let public_dir = &site.public_dir;

    fs::create_dir_all(public_dir)?;

    // Blog listing
    let view = BlogListView::derive(&posts, blog_config);
    let html = renderer.render_blog(&LoadState::Loaded(view))?;
    write_page(&public_dir.join("blog/index.html"), &html)?;

    // Post pages
    for post in &posts {
        if !post.has_id() {
            tracing::warn!("Skipping post without an id: {:?}", post.title);
            continue;
        }
        let output_path = public_dir
            .join("blog")
            .join(encode_segment(&post.id))
            .join("index.html");
        let view = PostView::new(post.clone(), blog_config.render_markdown);
        let html = renderer.render_post(&LoadState::Loaded(view))?;
        write_page(&output_path, &html)?;
    }

    // Events listing
    let view = EventsView::derive(&events);
    tracing::info!("{} of {} events are published", view.events.len(), events.len());
    let html = renderer.render_events(&LoadState::Loaded(view))?;
    write_page(&public_dir.join("events/index.html"), &html)?;

    // Not found page for static hosts
    let html = renderer.render_not_found()?;
    write_page(&public_dir.join("404.html"), &html)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

fn write_page(output_path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, html)?;
    tracing::debug!("Generated: {:?}", output_path);
    Ok(())
}
