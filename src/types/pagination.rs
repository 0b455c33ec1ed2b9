//! Pagination types for the user list endpoint.

use serde::Deserialize;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters.
///
/// Values of 0 are clamped up to 1 rather than rejected, and the limit is
/// capped at `MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    pub page: u64,
    pub limit: u64,
}

impl PaginationParams {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Effective 1-indexed page number
    pub fn page(&self) -> u64 {
        self.page.max(DEFAULT_PAGE_NUMBER)
    }

    /// Number of rows to skip for the database query.
    ///
    /// Saturates instead of overflowing; a page past the end of the range
    /// yields an offset past the data and the query returns an empty page.
    pub fn offset(&self) -> u64 {
        self.page().saturating_sub(1).saturating_mul(self.limit())
    }

    /// Page size, clamped to [1, MAX_PAGE_SIZE]
    pub fn limit(&self) -> u64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination link targets derived from a page position and total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    /// Present iff the current page is past the first
    pub prev: Option<u64>,
    /// Present iff the current page is before the last
    pub next: Option<u64>,
    /// Always page 1
    pub first: u64,
    /// Last page holding any data; page 1 when the result set is empty so the
    /// link target stays well-formed
    pub last: u64,
}

impl PageLinks {
    /// Compute link targets for a page of size `limit` over `total` rows.
    pub fn compute(page: u64, limit: u64, total: u64) -> Self {
        let last = total.div_ceil(limit.max(1)).max(1);
        let page = page.max(1);

        Self {
            prev: (page > 1).then(|| page - 1),
            next: (page < last).then(|| page + 1),
            first: 1,
            last,
        }
    }

    /// Render an RFC 5988 `Link` header value.
    ///
    /// Format matches `<base?_page=N&_limit=L>; rel="prev|next|first|last"`,
    /// entries joined with `, `; prev/next are omitted when absent.
    pub fn to_link_header(&self, base_url: &str, limit: u64) -> String {
        let mut links = Vec::with_capacity(4);

        if let Some(prev) = self.prev {
            links.push(format!(
                "<{}?_page={}&_limit={}>; rel=\"prev\"",
                base_url, prev, limit
            ));
        }
        if let Some(next) = self.next {
            links.push(format!(
                "<{}?_page={}&_limit={}>; rel=\"next\"",
                base_url, next, limit
            ));
        }
        links.push(format!(
            "<{}?_page={}&_limit={}>; rel=\"first\"",
            base_url, self.first, limit
        ));
        links.push(format!(
            "<{}?_page={}&_limit={}>; rel=\"last\"",
            base_url, self.last, limit
        ));

        links.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_computation() {
        let params = PaginationParams::new(2, 10);
        assert_eq!(params.offset(), 10);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_zero_page_and_limit_clamped() {
        let params = PaginationParams::new(0, 0);
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_huge_page_number_saturates_offset() {
        let params = PaginationParams::new(u64::MAX, 100);
        assert_eq!(params.offset(), u64::MAX);
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_limit_capped() {
        let params = PaginationParams::new(1, 10_000);
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_middle_page_has_prev_and_next() {
        let links = PageLinks::compute(2, 10, 30);
        assert_eq!(links.prev, Some(1));
        assert_eq!(links.next, Some(3));
        assert_eq!(links.first, 1);
        assert_eq!(links.last, 3);
    }

    #[test]
    fn test_first_page_has_no_prev() {
        let links = PageLinks::compute(1, 10, 30);
        assert_eq!(links.prev, None);
        assert_eq!(links.next, Some(2));
    }

    #[test]
    fn test_last_page_has_no_next() {
        // 15 users, page 2 of 10 per page: 5 users on the final page
        let links = PageLinks::compute(2, 10, 15);
        assert_eq!(links.prev, Some(1));
        assert_eq!(links.next, None);
        assert_eq!(links.last, 2);
    }

    #[test]
    fn test_empty_result_set_points_last_at_page_one() {
        let links = PageLinks::compute(1, 10, 0);
        assert_eq!(links.prev, None);
        assert_eq!(links.next, None);
        assert_eq!(links.first, 1);
        assert_eq!(links.last, 1);
    }

    #[test]
    fn test_link_header_format() {
        let links = PageLinks::compute(2, 10, 15);
        let header = links.to_link_header("http://localhost:3000/users", 10);

        assert!(header.contains("<http://localhost:3000/users?_page=1&_limit=10>; rel=\"prev\""));
        assert!(!header.contains("rel=\"next\""));
        assert!(header.contains("rel=\"first\""));
        assert!(header.contains("<http://localhost:3000/users?_page=2&_limit=10>; rel=\"last\""));
    }

    #[test]
    fn test_pages_cover_total_exactly() {
        // Concatenating pages 1..=last at limit L covers exactly T rows.
        for total in [0u64, 1, 9, 10, 11, 15, 100] {
            for limit in [1u64, 3, 10] {
                let last = PageLinks::compute(1, limit, total).last;
                let covered: u64 = (1..=last)
                    .map(|p| total.saturating_sub((p - 1) * limit).min(limit))
                    .sum();
                assert_eq!(covered, total);
                // No page past `last` would hold data
                assert!((last) * limit >= total);
            }
        }
    }
}
