//! Content module - blog posts, events, and content processing

mod de;
mod event;
mod markdown;
mod post;

pub use event::{Event, PUBLISHED_STATUS};
pub use markdown::MarkdownRenderer;
pub use post::{BlogPost, CategorySummary};
