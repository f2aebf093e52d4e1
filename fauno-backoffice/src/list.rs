//! Generic list engine shared by the paginated tabs.
//!
//! Holds the rows, totals and pagination/search state for one resource
//! collection. Fetches are sequence-numbered: the controller calls
//! [`ListState::begin`] before issuing the request and [`ListState::apply`]
//! with the result, and a response arriving under a superseded sequence
//! number is discarded instead of overwriting fresher rows. A failed fetch
//! applies nothing, so the previous state stays intact.

use shared::{ListPage, ListQuery, Pagination};

#[derive(Debug, Clone)]
pub struct ListState<T> {
    rows: Vec<T>,
    total: u64,
    active: Option<u64>,
    page: u32,
    limit: u32,
    search: Option<String>,
    seq: u64,
}

impl<T> ListState<T> {
    pub fn new(limit: u32) -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            active: None,
            page: 1,
            limit,
            search: None,
            seq: 0,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Server-reported collection total, displayed verbatim.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Active-item count when the endpoint reports one.
    pub fn active(&self) -> Option<u64> {
        self.active
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Query parameters for the current page/limit/search state.
    pub fn query(&self) -> ListQuery {
        let query = ListQuery::new(self.page, self.limit);
        match &self.search {
            Some(search) => query.with_search(search.clone()),
            None => query,
        }
    }

    /// Start a fetch, superseding any still in flight. Returns the
    /// sequence number to pass back into [`apply`](Self::apply).
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Install a fetch result. A stale `seq` means a newer fetch has been
    /// issued since; the result is dropped and `false` returned.
    pub fn apply(&mut self, seq: u64, page: ListPage<T>) -> bool {
        if seq != self.seq {
            tracing::debug!(seq, current = self.seq, "discarding stale list response");
            return false;
        }
        self.rows = page.rows;
        self.total = page.total;
        self.active = page.active;
        true
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Change the page size; jumps back to the first page.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    /// Change the search keyword; blank input clears it. Jumps back to
    /// the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self.page = 1;
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit, self.total)
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination().total_pages()
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: Vec<i32>, total: u64) -> ListPage<i32> {
        ListPage {
            rows,
            total,
            active: None,
        }
    }

    #[test]
    fn test_apply_installs_current_fetch() {
        let mut list = ListState::new(20);
        let seq = list.begin();
        assert!(list.apply(seq, page(vec![1, 2, 3], 25)));
        assert_eq!(list.rows(), [1, 2, 3]);
        assert_eq!(list.total(), 25);
        assert_eq!(list.total_pages(), 2);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut list = ListState::new(20);
        let first = list.begin();
        let second = list.begin();

        // newer fetch lands first
        assert!(list.apply(second, page(vec![10], 1)));
        // the slow one arrives late and must not overwrite
        assert!(!list.apply(first, page(vec![99], 42)));
        assert_eq!(list.rows(), [10]);
        assert_eq!(list.total(), 1);
    }

    #[test]
    fn test_limit_and_search_reset_page() {
        let mut list = ListState::<i32>::new(20);
        list.set_page(3);
        list.set_limit(50);
        assert_eq!(list.page(), 1);

        list.set_page(2);
        list.set_search("колодки");
        assert_eq!(list.page(), 1);
        assert_eq!(list.search(), Some("колодки"));

        list.set_search("   ");
        assert!(list.search().is_none());
    }

    #[test]
    fn test_query_reflects_state() {
        let mut list = ListState::<i32>::new(25);
        list.set_page(2);
        let query = list.query();
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 25);
        assert!(query.search.is_none());
    }
}
