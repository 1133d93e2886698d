//! Built-in page templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. Output is
//! HTML-escaped by default; only URLs built by this crate and markdown
//! rendered by [`crate::content::MarkdownRenderer`] are marked safe.

use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{BlogPost, CategorySummary, Event};
use crate::helpers::{self, price_badge};
use crate::i18n::I18n;
use crate::page::{BlogListView, EventsView, LoadState, PageError, PostView};

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
    config: SiteConfig,
    i18n: I18n,
    translations: serde_json::Value,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: SiteConfig, i18n: I18n) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("blog.html", include_str!("site/blog.html")),
            ("post.html", include_str!("site/post.html")),
            ("events.html", include_str!("site/events.html")),
            ("not_found.html", include_str!("site/not_found.html")),
            // Partials
            ("partials/nav.html", include_str!("site/partials/nav.html")),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            (
                "partials/loading.html",
                include_str!("site/partials/loading.html"),
            ),
            (
                "partials/error.html",
                include_str!("site/partials/error.html"),
            ),
            (
                "partials/newsletter.html",
                include_str!("site/partials/newsletter.html"),
            ),
            (
                "partials/post_card.html",
                include_str!("site/partials/post_card.html"),
            ),
        ])?;

        // Register custom filters
        tera.register_filter("short_date", short_date_filter);
        tera.register_filter("long_date", long_date_filter);
        tera.register_filter("full_date", full_date_filter);
        tera.register_filter("date_attr", date_attr_filter);
        tera.register_filter("time_12h", time_12h_filter);

        let translations = nest_translations(&i18n.get_all_translations());

        Ok(Self {
            tera,
            config,
            i18n,
            translations,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Render the blog listing in any load state
    pub fn render_blog(&self, state: &LoadState<BlogListView>) -> Result<String> {
        let canonical = helpers::full_url_for(&self.config, "blog");
        let mut context = self.base_context(state_name(state), Some(canonical));

        let (categories, featured, recent, total): (
            Vec<CategoryData>,
            Vec<PostCardData>,
            Vec<PostCardData>,
            usize,
        ) = match state.loaded() {
            Some(view) => (
                view.categories
                    .iter()
                    .map(|c| self.category_data(c))
                    .collect(),
                view.featured
                    .iter()
                    .filter_map(|p| self.post_card(p))
                    .collect(),
                view.recent
                    .iter()
                    .filter_map(|p| self.post_card(p))
                    .collect(),
                view.total,
            ),
            None => (Vec::new(), Vec::new(), Vec::new(), 0),
        };

        context.insert("categories", &categories);
        context.insert("featured", &featured);
        context.insert("recent", &recent);
        context.insert("total", &total);

        self.render("blog.html", &context)
    }

    /// Render a post detail page in any load state
    pub fn render_post(&self, state: &LoadState<PostView>) -> Result<String> {
        let view = state.loaded();
        let canonical = view.map(|v| {
            let path = format!("blog/{}", helpers::encode_segment(&v.post.id));
            helpers::full_url_for(&self.config, &path)
        });
        let mut context = self.base_context(state_name(state), canonical);

        context.insert("post", &view.map(|v| &v.post));
        context.insert("has_tags", &view.is_some_and(|v| v.post.has_tags()));
        context.insert("body_html", &view.and_then(|v| v.body_html.as_deref()));

        self.render("post.html", &context)
    }

    /// Render the events listing in any load state
    pub fn render_events(&self, state: &LoadState<EventsView>) -> Result<String> {
        let canonical = helpers::full_url_for(&self.config, "events");
        let mut context = self.base_context(state_name(state), Some(canonical));

        let events: Vec<EventCardData> = state
            .loaded()
            .map(|view| view.events.iter().map(|e| self.event_card(e)).collect())
            .unwrap_or_default();
        context.insert("events", &events);

        self.render("events.html", &context)
    }

    /// Render the generic 404 page
    pub fn render_not_found(&self) -> Result<String> {
        let context = self.base_context("not_found", None);
        self.render("not_found.html", &context)
    }

    fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    fn base_context(&self, state: &str, canonical_url: Option<String>) -> Context {
        let mut context = Context::new();
        context.insert("canonical_url", &canonical_url);
        context.insert("site", &self.site_data());
        context.insert("t", &self.translations);
        context.insert("state", state);
        context
    }

    fn site_data(&self) -> SiteData {
        SiteData {
            title: self.config.title.clone(),
            description: self.config.description.clone(),
            language: self.i18n.language().to_string(),
            root: helpers::url_for(&self.config, ""),
            blog_url: helpers::blog_url(&self.config),
            events_url: helpers::events_url(&self.config),
            year: chrono::Local::now().year(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn category_data(&self, summary: &CategorySummary) -> CategoryData {
        CategoryData {
            name: summary.name.clone(),
            count: summary.count,
            count_label: self.i18n.get_plural("blog.article_count", summary.count),
            icon: self.config.category_icon(&summary.name).to_string(),
            anchor: helpers::category_anchor(&summary.name),
        }
    }

    /// Card for the listing; posts without an id have no page to link to
    fn post_card(&self, post: &BlogPost) -> Option<PostCardData> {
        if !post.has_id() {
            tracing::warn!("Leaving post without an id off the listing: {:?}", post.title);
            return None;
        }

        Some(PostCardData {
            id: post.id.clone(),
            url: helpers::post_url(&self.config, &post.id),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.clone(),
            author: post.author.clone(),
            published_at: post.published_at.clone(),
            read_time: post.read_time.clone(),
            featured: post.featured,
        })
    }

    fn event_card(&self, event: &Event) -> EventCardData {
        EventCardData {
            id: event.id.clone(),
            url: helpers::event_url(&self.config, &event.id),
            register_url: helpers::event_register_url(&self.config, &event.id),
            title: event.title.clone(),
            description: event.description.clone(),
            event_date: event.event_date.clone(),
            event_time: event.event_time.clone(),
            location: event.location.clone(),
            attendees_label: self
                .i18n
                .get_count("events.max_attendees", event.max_attendees),
            price_badge: price_badge(event.price, &event.currency),
            image_url: event.image_url.clone().filter(|url| !url.is_empty()),
            status: event.status.clone(),
            registration_enabled: event.registration_enabled,
        }
    }
}

fn state_name<T>(state: &LoadState<T>) -> &'static str {
    match state {
        LoadState::Loading => "loading",
        LoadState::Loaded(_) => "loaded",
        LoadState::Failed(PageError::NotFound) => "not_found",
        LoadState::Failed(PageError::LoadFailure { .. }) => "error",
    }
}

/// Turn dot-notation keys into nested objects so templates can write
/// `t.blog.load_error`
fn nest_translations(flat: &HashMap<String, String>) -> serde_json::Value {
    let mut root = serde_json::Map::new();
    for (key, value) in flat {
        let parts: Vec<&str> = key.split('.').collect();
        insert_nested(&mut root, &parts, value);
    }
    serde_json::Value::Object(root)
}

fn insert_nested(
    map: &mut serde_json::Map<String, serde_json::Value>,
    parts: &[&str],
    value: &str,
) {
    match parts {
        [] => {}
        [leaf] => {
            map.insert(
                leaf.to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
        [head, rest @ ..] => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
            if let serde_json::Value::Object(child) = entry {
                insert_nested(child, rest, value);
            } else {
                let mut child = serde_json::Map::new();
                insert_nested(&mut child, rest, value);
                *entry = serde_json::Value::Object(child);
            }
        }
    }
}

macro_rules! date_filter {
    ($name:ident, $label:literal, $format:path) => {
        fn $name(
            value: &tera::Value,
            _args: &HashMap<String, tera::Value>,
        ) -> tera::Result<tera::Value> {
            let s = tera::try_get_value!($label, "value", String, value);
            Ok(tera::Value::String($format(&s)))
        }
    };
}

date_filter!(short_date_filter, "short_date", helpers::format_short_date);
date_filter!(long_date_filter, "long_date", helpers::format_long_date);
date_filter!(full_date_filter, "full_date", helpers::format_full_date);
date_filter!(date_attr_filter, "date_attr", helpers::date_attr);
date_filter!(time_12h_filter, "time_12h", helpers::format_time_12h);

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub language: String,
    pub root: String,
    pub blog_url: String,
    pub events_url: String,
    pub year: i32,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryData {
    pub name: String,
    pub count: usize,
    pub count_label: String,
    pub icon: String,
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCardData {
    pub id: String,
    pub url: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub published_at: String,
    pub read_time: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventCardData {
    pub id: String,
    pub url: String,
    pub register_url: String,
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub attendees_label: String,
    pub price_badge: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub registration_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new(SiteConfig::default(), I18n::default()).unwrap()
    }

    fn post(id: &str, category: &str, featured: bool) -> BlogPost {
        let mut post = BlogPost::new(id, format!("Title {}", id));
        post.category = category.to_string();
        post.featured = featured;
        post.published_at = "2024-03-15T10:00:00Z".to_string();
        post.read_time = "5 min read".to_string();
        post
    }

    fn event(id: &str, price: f64) -> Event {
        let mut event = Event::new(id, format!("Event {}", id), "published");
        event.event_date = "2024-03-15".to_string();
        event.event_time = "14:30:00".to_string();
        event.price = price;
        event.currency = "USD".to_string();
        event.max_attendees = 40;
        event
    }

    #[test]
    fn test_render_blog_loaded() {
        let posts = vec![
            post("1", "AI & Technology", true),
            post("2", "AI & Technology", true),
            post("3", "Business Growth", false),
        ];
        let view = BlogListView::derive(&posts, &BlogConfig::default());
        let html = renderer().render_blog(&LoadState::Loaded(view)).unwrap();

        assert!(html.contains("Featured Articles"));
        assert!(html.contains("AI &amp; Technology"));
        assert!(html.contains("2 articles"));
        assert!(html.contains("1 article<"));
        assert!(html.contains("icon-brain"));
        assert!(html.contains(r#"href="/blog/1""#));
        assert!(html.contains("Mar 15, 2024"));
        assert_eq!(html.matches("data-post-id=").count(), 3);
        assert!(!html.contains("Failed to load blog posts."));
    }

    #[test]
    fn test_render_blog_error() {
        let state = LoadState::Failed(PageError::load_failure("connection refused"));
        let html = renderer().render_blog(&state).unwrap();
        assert!(html.contains("Failed to load blog posts."));
        // The reason is for logs, not for visitors
        assert!(!html.contains("connection refused"));
        assert!(!html.contains("Loading articles..."));
    }

    #[test]
    fn test_render_blog_loading_and_empty() {
        let html = renderer().render_blog(&LoadState::Loading).unwrap();
        assert!(html.contains("Loading articles..."));

        let view = BlogListView::derive(&[], &BlogConfig::default());
        let html = renderer().render_blog(&LoadState::Loaded(view)).unwrap();
        assert!(html.contains("No articles published yet"));
        assert!(!html.contains("data-post-id="));
    }

    #[test]
    fn test_render_post_loaded() {
        let mut p = post("hello", "Business Growth", false);
        p.content = "Line one\n<b>Line two</b>".to_string();
        p.tags = vec!["growth".to_string(), "tips".to_string()];
        let html = renderer()
            .render_post(&LoadState::Loaded(PostView::new(p, false)))
            .unwrap();

        assert!(html.contains("Title hello"));
        assert!(html.contains("March 15, 2024"));
        assert!(html.contains("&lt;b&gt;Line two&lt;&#x2F;b&gt;"));
        assert!(html.contains("Tags:"));
        assert!(html.contains(">growth<"));
        assert!(html.contains(r#"href="/blog""#));
    }

    #[test]
    fn test_render_post_without_tags() {
        let html = renderer()
            .render_post(&LoadState::Loaded(PostView::new(post("x", "A", false), false)))
            .unwrap();
        assert!(!html.contains("Tags:"));
    }

    #[test]
    fn test_render_post_markdown_body() {
        let mut p = post("md", "A", false);
        p.content = "## Heading".to_string();
        let html = renderer()
            .render_post(&LoadState::Loaded(PostView::new(p, true)))
            .unwrap();
        assert!(html.contains("<h2>Heading</h2>"));
    }

    #[test]
    fn test_render_post_not_found() {
        let html = renderer()
            .render_post(&LoadState::Failed(PageError::NotFound))
            .unwrap();
        assert!(html.contains("Post not found"));
        assert!(html.contains(r#"<a class="btn back" href="/blog">Back to Blog</a>"#));
    }

    #[test]
    fn test_render_post_load_failure() {
        let html = renderer()
            .render_post(&LoadState::Failed(PageError::load_failure("timeout")))
            .unwrap();
        assert!(html.contains("Failed to load blog post."));
        assert!(!html.contains("Post not found"));
    }

    #[test]
    fn test_render_events() {
        let mut free = event("1", 0.0);
        free.registration_enabled = true;
        let paid = event("2", 25.0);
        let view = EventsView::derive(&[free, paid, Event::new("3", "Hidden", "draft")]);
        let html = renderer().render_events(&LoadState::Loaded(view)).unwrap();

        assert_eq!(html.matches("data-event-id=").count(), 2);
        assert!(!html.contains("Hidden"));
        assert!(html.contains("Friday, March 15, 2024"));
        assert!(html.contains("2:30 PM"));
        assert!(html.contains("Max 40 attendees"));
        assert_eq!(html.matches(r#"class="badge price""#).count(), 1);
        assert!(html.contains("25 USD"));
        assert_eq!(html.matches(">Register<").count(), 1);
        assert!(html.contains(r#"href="/events/1/register""#));
    }

    #[test]
    fn test_render_events_empty_and_error() {
        let view = EventsView::derive(&[Event::new("1", "Draft", "draft")]);
        let html = renderer().render_events(&LoadState::Loaded(view)).unwrap();
        assert!(html.contains("No upcoming events"));

        let state = LoadState::Failed(PageError::load_failure("down"));
        let html = renderer().render_events(&state).unwrap();
        assert!(html.contains("Failed to load events"));
        assert!(!html.contains("No upcoming events"));
    }

    #[test]
    fn test_render_not_found() {
        let html = renderer().render_not_found().unwrap();
        assert!(html.contains("Page not found"));
    }

    #[test]
    fn test_nest_translations() {
        let mut flat = HashMap::new();
        flat.insert("blog.load_error".to_string(), "x".to_string());
        flat.insert("blog.article_count.one".to_string(), "y".to_string());
        flat.insert("top".to_string(), "z".to_string());
        let nested = nest_translations(&flat);
        assert_eq!(nested["blog"]["load_error"], "x");
        assert_eq!(nested["blog"]["article_count"]["one"], "y");
        assert_eq!(nested["top"], "z");
    }

    #[test]
    fn test_post_without_id_is_left_off_listing() {
        let mut orphan = post("", "A", false);
        orphan.title = "Orphan".to_string();
        let posts = vec![post("1", "A", false), orphan];
        let view = BlogListView::derive(&posts, &BlogConfig::default());
        let html = renderer().render_blog(&LoadState::Loaded(view)).unwrap();

        assert_eq!(html.matches("data-post-id=").count(), 1);
        assert!(!html.contains("Orphan"));
        assert!(!html.contains(r#"href="/blog/""#));
    }

    #[test]
    fn test_canonical_links() {
        let html = renderer()
            .render_post(&LoadState::Loaded(PostView::new(post("a b", "A", false), false)))
            .unwrap();
        assert!(html.contains(r#"<link rel="canonical" href="http://localhost:4000/blog/a%20b">"#));

        let html = renderer().render_events(&LoadState::Loading).unwrap();
        assert!(html.contains(r#"href="http://localhost:4000/events""#));

        let html = renderer().render_not_found().unwrap();
        assert!(!html.contains(r#"rel="canonical""#));
    }
}
