//! Events listing page

use std::sync::Arc;

use super::{PageError, PageLoad};
use crate::content::Event;
use crate::helpers::published_events;
use crate::source::ContentSource;

/// Events visible to the public
#[derive(Debug, Clone, PartialEq)]
pub struct EventsView {
    pub events: Vec<Event>,
}

impl EventsView {
    /// Keep only published events; this filter is always applied
    pub fn derive(events: &[Event]) -> Self {
        Self {
            events: published_events(events),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Mount the page: fetch all events once, then filter
    pub fn mount<S>(source: Arc<S>) -> PageLoad<Self>
    where
        S: ContentSource + ?Sized + 'static,
    {
        PageLoad::mount(async move {
            let events = source.fetch_events().await.map_err(PageError::from)?;
            let view = Self::derive(&events);
            tracing::debug!(
                "{} of {} events are published",
                view.events.len(),
                events.len()
            );
            Ok(view)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    #[tokio::test]
    async fn test_mount_shows_only_published() {
        let source = Arc::new(MemorySource::new(
            Vec::new(),
            vec![
                Event::new("1", "Draft", "draft"),
                Event::new("2", "Live", "published"),
            ],
        ));
        let state = EventsView::mount(source).settled().await;
        let view = state.loaded().unwrap();
        assert_eq!(view.events.len(), 1);
        assert_eq!(view.events[0].title, "Live");
    }

    #[tokio::test]
    async fn test_mount_none_published_is_empty_view() {
        let source = Arc::new(MemorySource::new(
            Vec::new(),
            vec![Event::new("1", "Draft", "draft")],
        ));
        let state = EventsView::mount(source).settled().await;
        assert!(state.loaded().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mount_rejected() {
        let source = Arc::new(MemorySource::failing("down"));
        let state = EventsView::mount(source).settled().await;
        assert!(state.error().is_some());
    }
}
