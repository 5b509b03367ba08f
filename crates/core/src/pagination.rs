//! Page-number pagination helpers.
//!
//! Pages are 1-based. Out-of-range inputs are clamped rather than rejected so
//! a stale UI link never produces an error.

/// Page size used when the caller does not request one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Resolved pagination window for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Build a page request, clamping `page` to at least 1 and `page_size`
    /// to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: Option<i64>, page_size: Option<i64>, default_page_size: i64) -> Self {
        let page = page.unwrap_or(1).max(1);
        let page_size = page_size
            .unwrap_or(default_page_size)
            .clamp(1, MAX_PAGE_SIZE);
        Self { page, page_size }
    }

    /// SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed to hold `total` rows (`ceil(total / page_size)`).
    pub fn total_pages(&self, total: i64) -> i64 {
        total_pages(total, self.page_size)
    }
}

/// `ceil(total / page_size)`, or 0 when there is nothing to show.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let req = PageRequest::new(None, None, DEFAULT_PAGE_SIZE);
        assert_eq!(req, PageRequest { page: 1, page_size: 10 });
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let req = PageRequest::new(Some(0), Some(500), DEFAULT_PAGE_SIZE);
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, MAX_PAGE_SIZE);

        let req = PageRequest::new(Some(-4), Some(0), DEFAULT_PAGE_SIZE);
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 1);
    }

    #[test]
    fn offset_follows_page_number() {
        let req = PageRequest::new(Some(3), Some(10), DEFAULT_PAGE_SIZE);
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
    }
}
