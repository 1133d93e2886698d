//! Blog post detail page

use std::sync::Arc;

use super::{PageError, PageLoad};
use crate::content::{BlogPost, MarkdownRenderer};
use crate::source::ContentSource;

/// A single post ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub post: BlogPost,
    /// Rendered body when markdown rendering is enabled; otherwise the body
    /// is shown as preformatted text
    pub body_html: Option<String>,
}

impl PostView {
    pub fn new(post: BlogPost, render_markdown: bool) -> Self {
        let body_html = render_markdown.then(|| MarkdownRenderer::new().render(&post.content));
        Self { post, body_html }
    }

    /// Mount the page for `id`: one lookup, `NotFound` when nothing matches
    pub fn mount<S>(source: Arc<S>, id: String, render_markdown: bool) -> PageLoad<Self>
    where
        S: ContentSource + ?Sized + 'static,
    {
        PageLoad::mount(async move {
            match source.fetch_blog_post_by_id(&id).await? {
                Some(post) => Ok(Self::new(post, render_markdown)),
                None => {
                    tracing::debug!("No blog post with id {:?}", id);
                    Err(PageError::NotFound)
                }
            }
        })
    }
}
