use serde::Serialize;

/// Number of rows in every page of search results.
pub const PAGE_SIZE: i64 = 6;

/// 1-based page number.
///
/// Requests for page zero or a negative page are clamped to the first page
/// rather than rejected, so every entry point behaves the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Page(i64);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: i64) -> Self {
        Self(number.max(1))
    }

    pub fn number(&self) -> i64 {
        self.0
    }

    /// Row offset of this page for the given page size.
    pub fn offset(&self, page_size: i64) -> i64 {
        offset_for(self.0, page_size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Row offset of a 1-based page: `(page - 1) * page_size`.
///
/// Pages below one are treated as the first page.
pub fn offset_for(page: i64, page_size: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(page_size)
}

/// Number of pages needed for `match_count` rows, zero when nothing matched.
pub fn total_pages(match_count: i64, page_size: i64) -> i64 {
    if match_count <= 0 || page_size <= 0 {
        return 0;
    }
    (match_count + page_size - 1) / page_size
}

/// One page of ordered search results plus the total page count for the
/// query that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultPage<T> {
    pub rows: Vec<T>,
    pub total_pages: i64,
}

impl<T> SearchResultPage<T> {
    pub fn new(rows: Vec<T>, total_pages: i64) -> Self {
        Self { rows, total_pages }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchResultPage<U> {
        SearchResultPage {
            rows: self.rows.into_iter().map(f).collect(),
            total_pages: self.total_pages,
        }
    }
}
