//! List site content

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::helpers::{category_summaries, date_attr, published_events, truncate};
use crate::source::ContentSource;

const EXCERPT_LENGTH: usize = 60;

/// List site content by type
pub async fn run(source: Arc<dyn ContentSource>, content_type: &str) -> Result<()> {
    let lines = match content_type {
        "post" | "posts" => {
            let posts = source
                .fetch_blog_posts()
                .await
                .context("Failed to fetch blog posts")?;
            let mut lines = vec![format!("Posts ({}):", posts.len())];
            for post in &posts {
                let marker = if post.featured { "*" } else { " " };
                lines.push(format!(
                    " {} {} - {} [{}]",
                    marker,
                    date_attr(&post.published_at),
                    post.title,
                    post.id
                ));
                if !post.excerpt.is_empty() {
                    lines.push(format!(
                        "      {}",
                        truncate(&post.excerpt, EXCERPT_LENGTH, None)
                    ));
                }
            }
            lines
        }
        "category" | "categories" => {
            let posts = source
                .fetch_blog_posts()
                .await
                .context("Failed to fetch blog posts")?;
            let categories = category_summaries(&posts);
            let mut lines = vec![format!("Categories ({}):", categories.len())];
            for category in categories {
                lines.push(format!("  {} ({})", category.name, category.count));
            }
            lines
        }
        "event" | "events" => {
            let events = source
                .fetch_events()
                .await
                .context("Failed to fetch events")?;
            let published = published_events(&events).len();
            let mut lines = vec![format!(
                "Events ({}, {} published):",
                events.len(),
                published
            )];
            for event in &events {
                lines.push(format!(
                    "  {} - {} [{}] ({})",
                    date_attr(&event.event_date),
                    event.title,
                    event.id,
                    event.status
                ));
            }
            lines
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, event",
                content_type
            );
        }
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
