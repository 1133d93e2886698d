//! Load lifecycle shared by all pages
//!
//! A page is mounted by issuing exactly one fetch. Until that fetch
//! resolves the page is [`LoadState::Loading`]; afterwards it is either
//! [`LoadState::Loaded`] or [`LoadState::Failed`] and stays there.

use std::future::Future;
use tokio::sync::watch;

use crate::source::SourceError;

/// User-visible failure kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The fetch was rejected. `reason` is for logs only; pages show a
    /// generic message.
    LoadFailure { reason: String },
    /// The lookup succeeded but no record matched
    NotFound,
}

impl PageError {
    pub fn load_failure(reason: impl Into<String>) -> Self {
        PageError::LoadFailure {
            reason: reason.into(),
        }
    }
}

impl From<SourceError> for PageError {
    fn from(err: SourceError) -> Self {
        PageError::load_failure(err.to_string())
    }
}

/// State of a page's single fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(PageError),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, PageError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PageError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// A mounted page whose fetch may still be outstanding
///
/// Dropping a `PageLoad` abandons the fetch: it keeps running to
/// completion and its result is discarded.
pub struct PageLoad<T> {
    rx: watch::Receiver<LoadState<T>>,
}

impl<T> PageLoad<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start the page's fetch on the runtime
    pub fn mount<F>(fetch: F) -> Self
    where
        F: Future<Output = Result<T, PageError>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(LoadState::Loading);

        tokio::spawn(async move {
            let result = fetch.await;
            if let Err(PageError::LoadFailure { reason }) = &result {
                tracing::warn!("Page fetch failed: {}", reason);
            }
            // The receiver may be gone if the page was torn down
            let _ = tx.send(LoadState::from_result(result));
        });

        Self { rx }
    }

    /// Current state without waiting
    pub fn state(&self) -> LoadState<T> {
        self.rx.borrow().clone()
    }

    /// Wait until the fetch has resolved
    pub async fn settled(mut self) -> LoadState<T> {
        loop {
            {
                let state = self.rx.borrow_and_update();
                if !state.is_loading() {
                    return state.clone();
                }
            }

            if self.rx.changed().await.is_err() {
                let state = self.rx.borrow().clone();
                if state.is_loading() {
                    // The fetch task died without reporting
                    return LoadState::Failed(PageError::load_failure(
                        "fetch ended without a result",
                    ));
                }
                return state;
            }
        }
    }
}
