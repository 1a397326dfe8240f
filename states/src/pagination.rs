//! Page position over a list of rows.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 20, 25, 50, 100];

/// Zero-based page index and page size. The total row count is passed in
/// wherever it matters, so the same value can follow a changing data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` rows. An empty list still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Row indices shown on the current page.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn can_previous(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    /// Returns `true` if the page changed.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Returns `true` if the page changed.
    pub fn next(&mut self, total: usize) -> bool {
        if !self.can_next(total) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Jumps to `page`, clamped to the last page. Returns `true` if the page
    /// changed.
    pub fn set_page(&mut self, page: usize, total: usize) -> bool {
        let page = page.min(self.page_count(total) - 1);
        let changed = page != self.page;
        self.page = page;
        changed
    }

    /// Changes the page size, moving to the page that holds the row that was
    /// first on screen. Returns `true` if anything changed.
    pub fn set_page_size(&mut self, page_size: usize, total: usize) -> bool {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return false;
        }
        let first_row = self.page * self.page_size;
        self.page_size = page_size;
        self.page = first_row / page_size;
        self.clamp(total);
        true
    }

    /// Pulls the page back into range after the row count shrank. Returns
    /// `true` if the page moved.
    pub fn clamp(&mut self, total: usize) -> bool {
        let last = self.page_count(total) - 1;
        if self.page > last {
            self.page = last;
            return true;
        }
        false
    }
}
