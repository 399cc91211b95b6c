//! Page math for the list view.
//!
//! Pagination is purely derived from `(total, requested_page)`. The requested
//! page is used unclamped: a page past the end yields an empty slice, not an
//! error. Page size is fixed at 20.

pub const PAGE_SIZE: usize = 20;

/// The derived view for one page of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    pub page_count: usize,
    pub effective_page: usize,
    pub start: usize,
    pub end: usize,
}

impl PageView {
    pub fn has_previous(&self) -> bool {
        self.effective_page > 1 && self.page_count > 1
    }

    pub fn has_next(&self) -> bool {
        self.effective_page != self.page_count
    }
}

pub fn page_count(total: usize) -> usize {
    if total > PAGE_SIZE {
        total.div_ceil(PAGE_SIZE)
    } else {
        1
    }
}

pub fn paginate(total: usize, requested_page: usize) -> PageView {
    let end = requested_page.saturating_mul(PAGE_SIZE);
    PageView {
        page_count: page_count(total),
        effective_page: requested_page,
        start: end.saturating_sub(PAGE_SIZE),
        end,
    }
}

/// The entries visible on the page. Both bounds clamp to the list length, so
/// an out-of-range page is empty.
pub fn page_slice<'a>(urls: &'a [String], view: &PageView) -> &'a [String] {
    let start = view.start.min(urls.len());
    let end = view.end.min(urls.len());
    &urls[start..end]
}

/// Lenient page selection: absent, non-numeric, or zero all mean page 1.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok())
        .filter(|page| *page != 0)
        .unwrap_or(1)
}
