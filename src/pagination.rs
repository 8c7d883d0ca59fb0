//! Offset pagination state shared by the Raw Data and Alerts pages.
//!
//! [`PagedList`] owns the page index and the last page of records. Every fetch is
//! tagged with a [`PageTicket`]; a result is only applied while its ticket still
//! matches the current page, so a slow response for an old page can never
//! overwrite a newer one.

use crate::api::ApiError;

/// Records requested per page
pub const PAGE_SIZE: usize = 25;

/// Offset window sent to the list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn for_page(page: usize) -> Self {
        Self {
            skip: page.saturating_mul(PAGE_SIZE),
            limit: PAGE_SIZE,
        }
    }

    pub fn query_string(&self) -> String {
        format!("skip={}&limit={}", self.skip, self.limit)
    }
}

/// Page index an in-flight request was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    page: usize,
}

impl PageTicket {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::for_page(self.page)
    }
}

/// What happened to a finished request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// The user moved to another page while the request was in flight
    Discarded,
}

/// What the page should currently render
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    Failed(&'a str),
    Ready(&'a [T]),
}

/// View state for one paginated table
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    records: Vec<T>,
    loading: bool,
    error: Option<String>,
    page: usize,
}

impl<T> PagedList<T> {
    /// Fresh state: page 0, loading until the first fetch settles
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            page: 0,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// 1-based page number for display
    pub fn display_page(&self) -> usize {
        self.page + 1
    }

    /// A full page suggests there is more. Exact multiples of the page size
    /// produce one trailing empty page.
    pub fn has_next_page(&self) -> bool {
        self.records.len() == PAGE_SIZE
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    /// Step back one page. Returns false when already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Step forward one page. Returns false when the last page was not full.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Mark a request for the current page as started
    pub fn begin(&mut self) -> PageTicket {
        self.loading = true;
        PageTicket { page: self.page }
    }

    /// Apply a finished request if it is still for the current page.
    ///
    /// Failures keep the previous records and store `failure_message`.
    pub fn settle(
        &mut self,
        ticket: PageTicket,
        result: Result<Vec<T>, ApiError>,
        failure_message: &str,
    ) -> Settled {
        if ticket.page != self.page {
            return Settled::Discarded;
        }

        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(failure_message.to_string());
            }
        }
        self.loading = false;

        Settled::Applied
    }

    pub fn view(&self) -> ListView<'_, T> {
        if self.loading {
            ListView::Loading
        } else if let Some(error) = &self.error {
            ListView::Failed(error)
        } else {
            ListView::Ready(&self.records)
        }
    }
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FAILED: &str = "Failed to load things.";

    fn full_page() -> Vec<u32> {
        (0..PAGE_SIZE as u32).collect()
    }

    fn loaded(records: Vec<u32>) -> PagedList<u32> {
        let mut list = PagedList::new();
        let ticket = list.begin();
        list.settle(ticket, Ok(records), FAILED);
        list
    }

    #[test]
    fn test_request_for_page() {
        for page in [0, 1, 2, 7, 100] {
            let request = PageRequest::for_page(page);
            assert_eq!(request.skip, page * 25);
            assert_eq!(request.limit, 25);
        }
        assert_eq!(PageRequest::for_page(3).query_string(), "skip=75&limit=25");
    }

    #[test]
    fn test_initial_state() {
        let list: PagedList<u32> = PagedList::new();
        assert_eq!(list.page(), 0);
        assert_eq!(list.display_page(), 1);
        assert!(list.is_loading());
        assert!(list.records().is_empty());
        assert!(!list.has_previous_page());
        assert_eq!(list.view(), ListView::Loading);
    }

    #[test]
    fn test_has_next_page_only_on_full_page() {
        assert!(loaded(full_page()).has_next_page());
        assert!(!loaded(vec![1, 2, 3]).has_next_page());
        assert!(!loaded(Vec::new()).has_next_page());
        assert!(!loaded((0..PAGE_SIZE as u32 - 1).collect()).has_next_page());
    }

    #[test]
    fn test_next_page_requires_full_page() {
        let mut list = loaded(vec![1, 2]);
        assert!(!list.next_page());
        assert_eq!(list.page(), 0);

        let mut list = loaded(full_page());
        assert!(list.next_page());
        assert_eq!(list.page(), 1);
        assert_eq!(list.begin().request(), PageRequest { skip: 25, limit: 25 });
    }

    #[test]
    fn test_previous_page() {
        let mut list = loaded(full_page());
        assert!(!list.previous_page());

        list.next_page();
        let ticket = list.begin();
        list.settle(ticket, Ok(full_page()), FAILED);
        list.next_page();
        assert_eq!(list.page(), 2);
        assert!(list.has_previous_page());

        assert!(list.previous_page());
        assert_eq!(list.page(), 1);
        assert_eq!(list.display_page(), 2);
        assert_eq!(list.begin().page(), 1);
    }

    #[test]
    fn test_failure_keeps_records_and_hides_table() {
        let mut list = loaded(vec![10, 20]);
        let ticket = list.begin();
        let settled = list.settle(
            ticket,
            Err(ApiError::Network("offline".to_string())),
            FAILED,
        );

        assert_eq!(settled, Settled::Applied);
        assert!(!list.is_loading());
        assert_eq!(list.error(), Some(FAILED));
        assert_eq!(list.records(), &[10, 20]);
        assert_eq!(list.view(), ListView::Failed(FAILED));
    }

    #[test]
    fn test_success_clears_error() {
        let mut list = loaded(vec![1]);
        let ticket = list.begin();
        list.settle(ticket, Err(ApiError::Network("offline".into())), FAILED);

        let ticket = list.begin();
        list.settle(ticket, Ok(vec![2, 3]), FAILED);
        assert_eq!(list.error(), None);
        assert_eq!(list.view(), ListView::Ready(&[2, 3][..]));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut list = loaded(full_page());
        list.next_page();
        let stale = list.begin();
        list.previous_page();
        let fresh = list.begin();

        let settled = list.settle(fresh, Ok(vec![1, 2, 3]), FAILED);
        assert_eq!(settled, Settled::Applied);

        // Page 1 answers late; page 0 is on screen
        let settled = list.settle(stale, Ok(vec![99]), FAILED);
        assert_eq!(settled, Settled::Discarded);
        assert_eq!(list.records(), &[1, 2, 3]);
        assert_eq!(list.page(), 0);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut list = loaded(full_page());
        let stale = list.begin();
        list.next_page();
        let _fresh = list.begin();

        list.settle(stale, Ok(vec![1]), FAILED);
        assert!(list.is_loading());
    }

    #[test]
    fn test_refetch_same_page_is_idempotent() {
        let mut list = loaded(vec![4, 5, 6]);
        let before = list.clone();

        let ticket = list.begin();
        list.settle(ticket, Ok(vec![4, 5, 6]), FAILED);
        assert_eq!(list, before);
    }
}
