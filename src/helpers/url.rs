//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters left as-is inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog") // -> "/site/blog"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Encode one URL path segment
///
/// Segments made only of dots are fully encoded so they never act as
/// `.` or `..` in a path.
pub fn encode_segment(segment: &str) -> String {
    if !segment.is_empty() && segment.chars().all(|c| c == '.') {
        return "%2E".repeat(segment.len());
    }
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Listing page for the blog
pub fn blog_url(config: &SiteConfig) -> String {
    url_for(config, "blog")
}

/// Detail page for one blog post
pub fn post_url(config: &SiteConfig, id: &str) -> String {
    url_for(config, &format!("blog/{}", encode_segment(id)))
}

/// Listing page for events
pub fn events_url(config: &SiteConfig) -> String {
    url_for(config, "events")
}

/// Detail page for one event
pub fn event_url(config: &SiteConfig, id: &str) -> String {
    url_for(config, &format!("events/{}", encode_segment(id)))
}

/// Registration page for one event
pub fn event_register_url(config: &SiteConfig, id: &str) -> String {
    url_for(config, &format!("events/{}/register", encode_segment(id)))
}

/// Anchor id for a category on the listing page
pub fn category_anchor(name: &str) -> String {
    format!("category-{}", slug::slugify(name))
}
