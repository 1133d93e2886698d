//! Helper functions for pages and templates
//!
//! Derivation over fetched collections (category counts, featured/recent
//! split, published filter) and display formatting for dates, times,
//! prices, and URLs.

mod date;
mod html;
mod list;
mod url;

pub use date::*;
pub use html::*;
pub use list::*;
pub use url::*;
