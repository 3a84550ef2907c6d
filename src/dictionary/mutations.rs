//! Add and delete.
//!
//! Every mutation keeps the filtered view consistent with the master list.
//! When a removal empties the filtered view the filter is dropped, the
//! search text is to be cleared and the main panel returns to page 1;
//! otherwise the affected page is clamped to the shrunken list.

use super::error::DictionaryError;
use super::types::{same_name, Outcome};
use super::Dictionary;
use tracing::{debug, info};

impl Dictionary {
    /// Moves `name` from the master list to the front of the added list.
    ///
    /// The stored spelling is kept. Unknown names are ignored.
    pub fn move_to_added(&mut self, name: &str) -> Outcome {
        let Some(stored) = self.master.iter().find(|m| same_name(m, name)).cloned() else {
            return Outcome::Unchanged;
        };
        info!(name = %stored, "moved to added list");
        self.added.insert(0, stored);
        let outcome = self.remove_from_main(name);
        self.sync_pages();
        match outcome {
            Outcome::SearchReset => Outcome::SearchReset,
            _ => Outcome::Updated,
        }
    }

    /// Inserts `text` at the front of the master list.
    ///
    /// Surrounding whitespace is trimmed and blank text is ignored. A name
    /// already listed (ignoring case) returns
    /// [`DictionaryError::Duplicate`] and leaves the list unchanged. On
    /// success the filter is dropped and the main panel returns to page 1.
    pub fn insert(&mut self, text: &str) -> Result<Outcome, DictionaryError> {
        let name = text.trim();
        if name.is_empty() {
            return Ok(Outcome::Unchanged);
        }
        if let Some(existing) = self.master.iter().find(|m| same_name(m, name)) {
            debug!(name, "duplicate insert rejected");
            return Err(DictionaryError::Duplicate {
                name: existing.clone(),
            });
        }

        info!(name, "inserted");
        self.master.insert(0, name.to_string());
        self.filtered.clear();
        self.main_pages.reset();
        self.sync_pages();
        Ok(Outcome::SearchReset)
    }

    /// Removes `name` (ignoring case) from the master list and the
    /// filtered view.
    pub fn delete(&mut self, name: &str) -> Outcome {
        if !self.master.iter().any(|m| same_name(m, name)) {
            return Outcome::Unchanged;
        }
        info!(name, "deleted");
        let outcome = self.remove_from_main(name);
        self.sync_pages();
        outcome
    }

    /// Removes `name` (ignoring case) from the added list.
    pub fn delete_added(&mut self, name: &str) -> Outcome {
        let before = self.added.len();
        self.added.retain(|m| !same_name(m, name));
        if self.added.len() == before {
            return Outcome::Unchanged;
        }
        info!(name, "deleted from added list");
        self.sync_pages();
        Outcome::Updated
    }

    fn remove_from_main(&mut self, name: &str) -> Outcome {
        self.master.retain(|m| !same_name(m, name));
        if self.filtered.is_empty() {
            return Outcome::Updated;
        }

        self.filtered.retain(|m| !same_name(m, name));
        if self.filtered.is_empty() {
            debug!("filtered view emptied, dropping filter");
            self.main_pages.reset();
            return Outcome::SearchReset;
        }
        Outcome::Updated
    }
}
