//! Markdown rendering for post bodies

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// URL schemes allowed in links and images; relative URLs are always allowed
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Markdown renderer for post bodies
///
/// Raw HTML embedded in the source is emitted as escaped text, and link or
/// image targets with a scheme outside [`SAFE_SCHEMES`] are replaced by `#`,
/// since post bodies come from a remote backend.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_SMART_PUNCTUATION,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) if !is_safe_url(&dest_url) => Event::Start(Tag::Link {
                link_type,
                dest_url: CowStr::Borrowed("#"),
                title,
                id,
            }),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
                link_type,
                dest_url: CowStr::Borrowed("#"),
                title,
                id,
            }),
            other => other,
        });

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

/// Relative URLs and URLs with an allowed scheme
fn is_safe_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    match cleaned.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_list() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("- one\n- two\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>two</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unsafe_link_targets_are_replaced() {
        let renderer = MarkdownRenderer::new();

        let html = renderer.render("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#">click</a>"##));

        let html = renderer.render("[x](<JavaScript :alert(1)>) ![img](data:text/html;base64,AAAA)");
        assert!(!html.to_lowercase().contains("javascript"));
        assert!(!html.contains("data:"));
    }

    #[test]
    fn test_safe_link_targets_are_kept() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render(
            "[a](https://example.com) [b](/blog/1) [c](mailto:hi@example.com) [d](#top) [e](page?x=a:b)",
        );
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"href="/blog/1""#));
        assert!(html.contains(r#"href="mailto:hi@example.com""#));
        assert!(html.contains(r##"href="#top""##));
        assert!(html.contains(r#"href="page?x=a:b""#));
    }
}
