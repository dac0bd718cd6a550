//! Pagination types
//!
//! Page payloads and the state tracked between page fetches.

/// One page of a listing as returned by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in service order
    pub items: Vec<T>,
    /// Cursor for the following page, `None` on the last page
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Create a page. An empty cursor string is treated as "no more pages".
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self {
            items,
            next_cursor: next_cursor.filter(|c| !c.is_empty()),
        }
    }

    /// Create the last page of a listing
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// Check if another page follows this one
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }
}

/// Where a paginator is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No page requested yet
    #[default]
    Fresh,
    /// The last page fetched carried a continuation cursor
    HasMore,
    /// The last page has been fetched
    Terminal,
    /// A page fetch failed
    Failed,
}

impl Phase {
    /// Check if no further pages will be fetched
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Terminal | Self::Failed)
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor to send with the next request
    pub cursor: Option<String>,
    /// Lifecycle phase
    pub phase: Phase,
    /// Pages fetched successfully
    pub pages_fetched: u32,
    /// Total items fetched so far
    pub total_fetched: u64,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state that resumes from a cursor
    pub fn with_cursor(cursor: Option<String>) -> Self {
        Self {
            cursor: cursor.filter(|c| !c.is_empty()),
            ..Default::default()
        }
    }

    /// Record a successful page fetch
    pub fn record_page(&mut self, items: usize, next_cursor: Option<String>) {
        self.pages_fetched += 1;
        self.total_fetched += items as u64;
        match next_cursor {
            Some(cursor) => {
                self.cursor = Some(cursor);
                self.phase = Phase::HasMore;
            }
            None => {
                self.cursor = None;
                self.phase = Phase::Terminal;
            }
        }
    }

    /// Mark pagination as failed
    pub fn mark_failed(&mut self) {
        self.phase = Phase::Failed;
    }

    /// Check if pagination is complete
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }
}
