//! Page bookkeeping for the "show more" list.
//!
//! Matches are never paged *away*: each page reveals the next `page_size`
//! matches beneath the ones already shown. The paginator only tracks how many
//! pages have been revealed; the match list itself lives in `AppState`.

use std::ops::Range;

/// Books revealed per page when nothing is configured.
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Tracks how many pages of matches are revealed.
///
/// Invariant: `page >= 1` and `page_size >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Creates a paginator on page 1. A zero page size is bumped to 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Number of matches currently revealed out of `total`.
    #[must_use]
    pub fn revealed(&self, total: usize) -> usize {
        self.page.saturating_mul(self.page_size).min(total)
    }

    /// Number of matches still hidden.
    #[must_use]
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.page.saturating_mul(self.page_size))
    }

    #[must_use]
    pub fn has_more(&self, total: usize) -> bool {
        self.remaining(total) > 0
    }

    /// Reveals the next page.
    ///
    /// Returns the range of match positions that became visible, or `None`
    /// (leaving the page unchanged) when everything is already shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfie::app::paging::Paginator;
    ///
    /// let mut pages = Paginator::new(36);
    /// assert_eq!(pages.show_more(80), Some(36..72));
    /// assert_eq!(pages.show_more(80), Some(72..80));
    /// assert_eq!(pages.show_more(80), None);
    /// assert_eq!(pages.page(), 3);
    /// ```
    pub fn show_more(&mut self, total: usize) -> Option<Range<usize>> {
        if !self.has_more(total) {
            return None;
        }

        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(total);
        self.page += 1;
        Some(start..end)
    }

    /// Label for the "show more" control: `Show more (N)`.
    #[must_use]
    pub fn label(&self, total: usize) -> String {
        format!("Show more ({})", self.remaining(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_reveals_up_to_page_size() {
        let pages = Paginator::new(36);
        assert_eq!(pages.page(), 1);
        assert_eq!(pages.revealed(100), 36);
        assert_eq!(pages.revealed(10), 10);
        assert_eq!(pages.remaining(100), 64);
        assert_eq!(pages.remaining(10), 0);
    }

    #[test]
    fn show_more_walks_to_the_end() {
        let mut pages = Paginator::new(10);
        assert_eq!(pages.show_more(25), Some(10..20));
        assert_eq!(pages.revealed(25), 20);
        assert_eq!(pages.show_more(25), Some(20..25));
        assert_eq!(pages.revealed(25), 25);
        assert!(!pages.has_more(25));
        assert_eq!(pages.show_more(25), None);
        assert_eq!(pages.page(), 3);
    }

    #[test]
    fn exact_multiple_has_nothing_left() {
        let mut pages = Paginator::new(5);
        assert_eq!(pages.show_more(10), Some(5..10));
        assert_eq!(pages.remaining(10), 0);
        assert_eq!(pages.show_more(10), None);
    }

    #[test]
    fn empty_match_list() {
        let mut pages = Paginator::default();
        assert_eq!(pages.revealed(0), 0);
        assert_eq!(pages.label(0), "Show more (0)");
        assert_eq!(pages.show_more(0), None);
        assert_eq!(pages.page(), 1);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut pages = Paginator::new(2);
        pages.show_more(9);
        pages.show_more(9);
        assert_eq!(pages.page(), 3);
        pages.reset();
        assert_eq!(pages.page(), 1);
        assert_eq!(pages.label(9), "Show more (7)");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let pages = Paginator::new(0);
        assert_eq!(pages.page_size(), 1);
        assert_eq!(pages.revealed(3), 1);
    }
}
