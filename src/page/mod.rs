//! Pages: fetch, derive, and hand a view to the renderer

mod blog;
mod events;
mod load;
mod post;

pub use blog::BlogListView;
pub use events::EventsView;
pub use load::{LoadState, PageError, PageLoad};
pub use post::PostView;
