//! Pull-based cursor paginator

use super::types::{Page, PaginationState, Phase};
use crate::error::{Error, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

/// A listing endpoint that can be read one page at a time
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Item type of the listing
    type Item: Send;

    /// Fetch the page that starts at `cursor` (`None` for the first page)
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<Self::Item>>;

    /// Short label used in log output
    fn describe(&self) -> String {
        "listing".to_string()
    }
}

/// Lazily fetches a listing page by page.
///
/// Each [`advance`](Self::advance) issues at most one request. Once the last
/// page has been delivered, or a fetch has failed, `advance` keeps returning
/// `false` without touching the network.
pub struct Paginator<S: PageSource> {
    source: S,
    state: PaginationState,
    items: Vec<S::Item>,
    error: Option<Error>,
}

impl<S: PageSource> Paginator<S> {
    /// Create a paginator that starts at the first page
    pub fn new(source: S) -> Self {
        Self::starting_at(source, None)
    }

    /// Create a paginator that starts at a previously returned cursor
    pub fn starting_at(source: S, cursor: Option<String>) -> Self {
        Self {
            source,
            state: PaginationState::with_cursor(cursor),
            items: Vec::new(),
            error: None,
        }
    }

    /// Fetch the next page.
    ///
    /// Returns `true` when a page was fetched and its items are available
    /// through [`items`](Self::items). Returns `false` when the listing is
    /// exhausted or a fetch failed; check [`err`](Self::err) to tell which.
    pub async fn advance(&mut self) -> bool {
        if self.state.is_finished() {
            return false;
        }

        let result = self.source.fetch_page(self.state.cursor.as_deref()).await;
        match result {
            Ok(page) => {
                self.state.record_page(page.items.len(), page.next_cursor);
                debug!(
                    "Fetched {} page {} ({} items, more: {})",
                    self.source.describe(),
                    self.state.pages_fetched,
                    page.items.len(),
                    self.state.phase == Phase::HasMore
                );
                self.items = page.items;
                true
            }
            Err(e) => {
                warn!(
                    "Stopping {} pagination after {} pages: {}",
                    self.source.describe(),
                    self.state.pages_fetched,
                    e
                );
                self.items.clear();
                self.state.mark_failed();
                self.error = Some(e);
                false
            }
        }
    }

    /// Items of the most recently fetched page
    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    /// Error that ended the iteration, if any
    pub fn err(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The source this paginator reads from
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the paginator, returning the recorded error
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Drain every remaining page into one vector
    pub async fn collect_all(mut self) -> Result<Vec<S::Item>> {
        let mut all = Vec::new();
        while self.advance().await {
            all.append(&mut self.items);
        }
        self.finish()?;
        Ok(all)
    }
}

impl<S: PageSource> std::fmt::Debug for Paginator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("source", &self.source.describe())
            .field("state", &self.state)
            .field("items", &self.items.len())
            .field("error", &self.error)
            .finish()
    }
}
