//! Page navigation over a filtered list.
//!
//! The paginator only knows how many items there are and how many fit on a
//! page. Callers update `total_items` whenever their filtered list changes and
//! hand that same filtered list to [`Paginator::page_items`].

use serde::Serialize;
use std::num::NonZeroUsize;

/// Navigation state for one paged listing.
///
/// `current_page` is always within `0..=max(total_pages - 1, 0)`: every
/// mutation clamps instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    items_per_page: NonZeroUsize,
    initial_page: usize,
    current_page: usize,
    total_items: usize,
    /// Set once the initial page has been applied against a non-empty count
    /// or the caller navigated explicitly
    placed: bool,
}

/// Snapshot of a paginator for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub has_multiple_pages: bool,
}

impl Paginator {
    pub fn new(items_per_page: NonZeroUsize) -> Self {
        Self {
            items_per_page,
            initial_page: 0,
            current_page: 0,
            total_items: 0,
            placed: false,
        }
    }

    /// Page to start on and to return to on [`reset`](Self::reset).
    ///
    /// Builder order doesn't matter: if no items are known yet, the page is
    /// applied on the first [`set_total_items`](Self::set_total_items) with a
    /// non-zero count.
    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self.place();
        self
    }

    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.set_total_items(total_items);
        self
    }

    /// Update the item count (length of the filtered list). The current page
    /// is pulled back if the list shrank below it.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        if self.placed {
            self.clamp();
        } else {
            self.place();
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page.get())
    }

    fn last_page(&self) -> usize {
        self.total_pages().saturating_sub(1)
    }

    fn clamp(&mut self) {
        self.current_page = self.current_page.min(self.last_page());
    }

    fn place(&mut self) {
        self.current_page = self.initial_page.min(self.last_page());
        self.placed = self.total_items > 0;
    }

    // Navigation

    pub fn go_to_page(&mut self, page: usize) {
        self.placed = true;
        self.current_page = page.min(self.last_page());
    }

    pub fn go_to_next_page(&mut self) {
        self.placed = true;
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn go_to_previous_page(&mut self) {
        self.placed = true;
        if self.can_go_previous() {
            self.current_page -= 1;
        }
    }

    pub fn go_to_first_page(&mut self) {
        self.placed = true;
        self.current_page = 0;
    }

    pub fn go_to_last_page(&mut self) {
        self.placed = true;
        self.current_page = self.last_page();
    }

    /// Back to the construction-time page (clamped to the current count)
    pub fn reset(&mut self) {
        self.place();
    }

    // Derived flags

    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    /// True on the final page, and also when there are no pages at all
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.last_page()
    }

    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page + 1 < self.total_pages()
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 0
    }

    // Slicing

    pub fn start_index(&self) -> usize {
        (self.current_page * self.items_per_page.get()).min(self.total_items)
    }

    pub fn end_index(&self) -> usize {
        (self.start_index() + self.items_per_page.get()).min(self.total_items)
    }

    /// The current page's slice of `items` (which should be the same
    /// filtered list `total_items` was taken from). Bounds are also clamped
    /// to `items.len()`, so a stale count never panics.
    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_index().min(items.len());
        let start = self.start_index().min(end);
        &items[start..end]
    }

    /// Page numbers to show in a pager control, centered on the current page.
    ///
    /// ## Algorithm
    /// 1. If every page fits, return `0..total_pages`
    /// 2. Otherwise open a window of `max_visible` pages starting
    ///    `max_visible / 2` before the current page
    /// 3. Shift the window back inside `0..total_pages` if it runs past either edge
    pub fn visible_page_numbers(&self, max_visible: usize) -> Vec<usize> {
        let total_pages = self.total_pages();
        if total_pages <= max_visible {
            return (0..total_pages).collect();
        }
        if max_visible == 0 {
            return Vec::new();
        }

        let half = max_visible / 2;
        let mut start = self.current_page.saturating_sub(half);
        let mut end = start.saturating_add(max_visible - 1);
        if end >= total_pages {
            end = total_pages - 1;
            start = end + 1 - max_visible;
        }
        (start..=end).collect()
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_items: self.total_items,
            items_per_page: self.items_per_page.get(),
            start_index: self.start_index(),
            end_index: self.end_index(),
            is_first_page: self.is_first_page(),
            is_last_page: self.is_last_page(),
            has_multiple_pages: self.has_multiple_pages(),
        }
    }
}
