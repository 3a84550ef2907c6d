//! Page state for a list of fixed-size pages.
//!
//! The paginator does not own any items. It tracks the current page for a
//! list of a given length, answers slice bounds for that page and renders
//! the "Page X of Y" control. Pages are 0-based internally and 1-based in
//! everything a user sees.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};

/// Number of names shown on one page.
pub const PAGE_SIZE: usize = 10;

/// Key bindings for moving between pages.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Go to the previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: key::Binding,
    /// Go to the next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// Pagination state for one list.
///
/// ```rust
/// use animal_dictionary::paginator::Model;
///
/// let mut pages = Model::new().with_total_items(25);
/// assert_eq!(pages.total_pages(), 3);
/// assert!(!pages.can_prev());
///
/// pages.next_page();
/// assert_eq!(pages.current(), 2);
/// assert_eq!(pages.get_slice_bounds(25), (10, 20));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Current page, 0-based.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    total_pages: usize,
    /// Format for the page control; the two `%d` are current and total.
    pub arabic_format: String,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: PAGE_SIZE,
            total_pages: 0,
            arabic_format: "Page %d of %d".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator with [`PAGE_SIZE`] items per page and no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total number of items (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Recomputes the page count for `items` and clamps the current page.
    ///
    /// An empty list has zero pages; the current page then rests on the
    /// first page.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page);
        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
    }

    /// Number of pages, `ceil(items / per_page)`.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Current page, 1-based.
    pub fn current(&self) -> usize {
        self.page + 1
    }

    /// Jumps back to the first page.
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Start (inclusive) and end (exclusive) indices of the current page
    /// within a list of `length` items.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Whether a previous page exists.
    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    /// Whether a next page exists.
    pub fn can_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Moves to the previous page unless already on the first.
    pub fn prev_page(&mut self) -> bool {
        if self.can_prev() {
            self.page -= 1;
            return true;
        }
        false
    }

    /// Moves to the next page unless already on the last.
    pub fn next_page(&mut self) -> bool {
        if self.can_next() {
            self.page += 1;
            return true;
        }
        false
    }

    /// Handles the page keys. Returns true if the page changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                return self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                return self.prev_page();
            }
        }
        false
    }

    /// Renders the page control, e.g. `"Page 2 of 5"`.
    ///
    /// An empty list reads as page 1 of 1.
    pub fn view(&self) -> String {
        self.arabic_format
            .replacen("%d", &self.current().to_string(), 1)
            .replacen("%d", &self.total_pages.max(1).to_string(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    #[test]
    fn page_count_is_ceiling_of_length() {
        assert_eq!(Model::new().with_total_items(0).total_pages(), 0);
        assert_eq!(Model::new().with_total_items(1).total_pages(), 1);
        assert_eq!(Model::new().with_total_items(10).total_pages(), 1);
        assert_eq!(Model::new().with_total_items(11).total_pages(), 2);
        assert_eq!(Model::new().with_total_items(95).total_pages(), 10);
    }

    #[test]
    fn navigation_is_blocked_at_both_ends() {
        let mut p = Model::new().with_total_items(20);
        assert!(!p.prev_page());
        assert_eq!(p.current(), 1);
        assert!(p.next_page());
        assert!(!p.next_page());
        assert_eq!(p.current(), 2);
    }

    #[test]
    fn empty_list_blocks_both_directions() {
        let mut p = Model::new();
        assert!(!p.can_prev());
        assert!(!p.can_next());
        assert!(!p.next_page());
        assert_eq!(p.view(), "Page 1 of 1");
    }

    #[test]
    fn shrinking_clamps_current_page() {
        let mut p = Model::new().with_total_items(35);
        p.next_page();
        p.next_page();
        p.next_page();
        assert_eq!(p.current(), 4);
        p.set_total_items(30);
        assert_eq!(p.current(), 3);
        p.set_total_items(0);
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn slice_bounds_cover_partial_last_page() {
        let mut p = Model::new().with_total_items(23);
        p.page = 2;
        assert_eq!(p.get_slice_bounds(23), (20, 23));
    }

    #[test]
    fn keys_drive_navigation() {
        let mut p = Model::new().with_total_items(30);
        assert!(p.update(&key(KeyCode::Right)));
        assert!(p.update(&key(KeyCode::Char('l'))));
        assert!(!p.update(&key(KeyCode::PageDown)));
        assert!(p.update(&key(KeyCode::Char('h'))));
        assert_eq!(p.view(), "Page 2 of 3");
    }
}
