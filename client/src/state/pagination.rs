//! Page-window arithmetic and the paginator view model.
//!
//! DESIGN
//! ======
//! Everything here is pure so the recommendations grid, the REST server, and
//! tests share one definition of "page N". The component keeps a `Paginator`
//! in an `RwSignal` and derives the slice and control state from it.
//!
//! Out-of-range pages are never an error: they produce an empty slice.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::num::NonZeroUsize;
use std::ops::Range;

/// Page numbers are 1-based.
pub const FIRST_PAGE: usize = 1;

/// Cards per page when the caller does not choose.
pub const DEFAULT_PRODUCTS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// Number of pages needed to show `count` items, `ceil(count / page_size)`.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// Index range of `page` within a list of `count` items, clipped to the list.
pub fn page_bounds(page: usize, page_size: NonZeroUsize, count: usize) -> Range<usize> {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(count);
    let end = page.saturating_mul(size).min(count).max(start);
    start..end
}

/// Items visible on `page`. Empty for page 0 or pages past the end.
pub fn page_slice<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    &items[page_bounds(page, page_size, items.len())]
}

/// Clamp `page` into `[1, total_pages]`; an empty list still sits on page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(FIRST_PAGE, total_pages.max(FIRST_PAGE))
}

/// Control state for the pagination bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationControls {
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub pages: Vec<PageButton>,
}

/// One numbered page button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Current-page counter plus page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCTS_PER_PAGE)
    }
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { current_page: FIRST_PAGE, page_size }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Jump to `page`. Not validated: the control bar's disabled states are
    /// the only guard, and an invalid page simply shows nothing.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    /// Items on the current page.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current_page, self.page_size)
    }

    /// Pull the current page back into range after the list changed.
    /// Returns `true` if the page moved.
    pub fn clamp_to(&mut self, count: usize) -> bool {
        let clamped = clamp_page(self.current_page, self.total_pages(count));
        let moved = clamped != self.current_page;
        self.current_page = clamped;
        moved
    }

    /// Control bar state, or `None` when everything fits on one page.
    pub fn controls(&self, count: usize) -> Option<PaginationControls> {
        let total = self.total_pages(count);
        if total <= 1 {
            return None;
        }
        let pages = (FIRST_PAGE..=total)
            .map(|number| PageButton { number, active: number == self.current_page })
            .collect();
        Some(PaginationControls {
            previous_disabled: self.current_page == FIRST_PAGE,
            next_disabled: self.current_page == total,
            pages,
        })
    }
}
