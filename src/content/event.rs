//! Event model

use serde::{Deserialize, Serialize};

use super::de::{null_as_default, string_or_number};

/// The only status that makes an event visible on the public listing
pub const PUBLISHED_STATUS: &str = "published";

/// An event as returned by the content backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Calendar date, e.g. "2024-03-15"
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_date: String,

    /// Time of day, e.g. "14:30:00"
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_time: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub max_attendees: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub registration_enabled: bool,

    /// Publication status, kept verbatim ("draft", "published", ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl Event {
    /// Create an event with the given identity and status
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            event_date: String::new(),
            event_time: String::new(),
            location: String::new(),
            price: 0.0,
            currency: String::new(),
            max_attendees: 0,
            registration_enabled: false,
            status: status.into(),
            image_url: None,
        }
    }

    /// Exact, case-sensitive match against "published"
    pub fn is_published(&self) -> bool {
        self.status == PUBLISHED_STATUS
    }
}
