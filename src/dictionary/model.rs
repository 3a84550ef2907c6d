//! The dictionary store: master list, filtered view, added list and the
//! page state of each panel.

use super::types::{same_name, Panel, Variant};
use crate::paginator;
use crate::source::{NameSource, SourceError};
use tracing::{debug, info};

/// In-memory animal dictionary.
///
/// The master list is the source of truth. While a filter is active the
/// main panel pages through the filtered view instead; an empty filtered
/// view means no filter is active. In the [`Variant::SplitPanel`] variant
/// names can be moved into a second, independently paginated list.
///
/// ```rust
/// use animal_dictionary::dictionary::{Dictionary, Variant};
///
/// let names = (1..=25).map(|i| format!("animal {i}")).collect();
/// let dict = Dictionary::new(names, Variant::SplitPanel);
/// assert_eq!(dict.main_pages().total_pages(), 3);
/// assert_eq!(dict.page_items().len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub(super) variant: Variant,
    pub(super) master: Vec<String>,
    pub(super) filtered: Vec<String>,
    pub(super) added: Vec<String>,
    pub(super) main_pages: paginator::Model,
    pub(super) added_pages: paginator::Model,
}

impl Dictionary {
    /// Creates a dictionary seeded with `names`.
    ///
    /// Blank names are dropped and duplicates (ignoring case) keep their
    /// first spelling.
    pub fn new(names: Vec<String>, variant: Variant) -> Self {
        let mut master: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim();
            if name.is_empty() || master.iter().any(|m| same_name(m, name)) {
                continue;
            }
            master.push(name.to_string());
        }
        info!(count = master.len(), %variant, "seeded dictionary");

        let mut dictionary = Self {
            variant,
            master,
            filtered: Vec::new(),
            added: Vec::new(),
            main_pages: paginator::Model::new(),
            added_pages: paginator::Model::new(),
        };
        dictionary.sync_pages();
        dictionary
    }

    /// Loads the seed names from `source`.
    pub fn from_source(source: &dyn NameSource, variant: Variant) -> Result<Self, SourceError> {
        let names = source.load()?;
        debug!(source = source.describe(), "loaded names");
        Ok(Self::new(names, variant))
    }

    /// The active variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Every listed name, in order.
    pub fn master(&self) -> &[String] {
        &self.master
    }

    /// The filtered view; empty when no filter is active.
    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    /// Names moved into the added panel, newest first.
    pub fn added(&self) -> &[String] {
        &self.added
    }

    /// Whether a filter is active.
    pub fn is_filtering(&self) -> bool {
        !self.filtered.is_empty()
    }

    /// The list the main panel shows: the filtered view when non-empty,
    /// otherwise the master list.
    pub fn active(&self) -> &[String] {
        if self.is_filtering() {
            &self.filtered
        } else {
            &self.master
        }
    }

    /// The full list behind `panel`.
    pub fn list(&self, panel: Panel) -> &[String] {
        match panel {
            Panel::Main => self.active(),
            Panel::Added => &self.added,
        }
    }

    /// Page state of the main panel.
    pub fn main_pages(&self) -> &paginator::Model {
        &self.main_pages
    }

    /// Page state of the added panel.
    pub fn added_pages(&self) -> &paginator::Model {
        &self.added_pages
    }

    /// Page state of `panel`.
    pub fn pages(&self, panel: Panel) -> &paginator::Model {
        match panel {
            Panel::Main => &self.main_pages,
            Panel::Added => &self.added_pages,
        }
    }

    /// Mutable page state of `panel`, for page navigation.
    ///
    /// The page count is kept in sync by the dictionary; callers only move
    /// between existing pages.
    pub fn pages_mut(&mut self, panel: Panel) -> &mut paginator::Model {
        match panel {
            Panel::Main => &mut self.main_pages,
            Panel::Added => &mut self.added_pages,
        }
    }

    /// Names on the current page of the main panel.
    pub fn page_items(&self) -> &[String] {
        self.panel_page(Panel::Main)
    }

    /// Names on the current page of the added panel.
    pub fn added_page_items(&self) -> &[String] {
        self.panel_page(Panel::Added)
    }

    /// Names on the current page of `panel`.
    pub fn panel_page(&self, panel: Panel) -> &[String] {
        let list = self.list(panel);
        let (start, end) = self.pages(panel).get_slice_bounds(list.len());
        &list[start..end]
    }

    /// Moves `panel` to the next page. Returns false on the last page.
    pub fn next_page(&mut self, panel: Panel) -> bool {
        self.pages_mut(panel).next_page()
    }

    /// Moves `panel` to the previous page. Returns false on the first page.
    pub fn prev_page(&mut self, panel: Panel) -> bool {
        self.pages_mut(panel).prev_page()
    }

    /// Recomputes page counts and clamps both current pages.
    pub(super) fn sync_pages(&mut self) {
        let active = self.active().len();
        self.main_pages.set_total_items(active);
        self.added_pages.set_total_items(self.added.len());
    }
}
