//! Blog post model

use serde::{Deserialize, Serialize};

use super::de::{null_as_default, string_or_number, string_or_vec};

/// A blog post as returned by the content backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Backend identifier, also used in the post URL
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Full body text
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    /// Category label (exact, case-sensitive)
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,

    /// Publication timestamp as sent by the backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,

    /// Read-time estimate, e.g. "5 min read"
    #[serde(default, deserialize_with = "null_as_default")]
    pub read_time: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    #[serde(default, deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Create a post with the given identity and empty optional fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            category: String::new(),
            author: String::new(),
            published_at: String::new(),
            read_time: String::new(),
            featured: false,
            tags: Vec::new(),
        }
    }

    /// Whether the post can be addressed by a URL
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

/// A category label with the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}
