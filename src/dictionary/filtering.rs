//! Search and filter state.

use super::error::DictionaryError;
use super::types::Outcome;
use super::Dictionary;
use tracing::{debug, warn};

impl Dictionary {
    /// Filters the master list down to names containing `query`, ignoring
    /// case, and returns to the first page.
    ///
    /// An empty query does nothing. A query that matches nothing returns
    /// [`DictionaryError::NoMatch`] and keeps the previous filter and page.
    pub fn search(&mut self, query: &str) -> Result<Outcome, DictionaryError> {
        if query.is_empty() {
            return Ok(Outcome::Unchanged);
        }

        let needle = query.to_lowercase();
        let results: Vec<String> = self
            .master
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if results.is_empty() {
            warn!(query, "search matched nothing");
            return Err(DictionaryError::NoMatch {
                query: query.to_string(),
            });
        }

        debug!(query, matches = results.len(), "search applied");
        self.filtered = results;
        self.main_pages.reset();
        self.sync_pages();
        Ok(Outcome::Updated)
    }

    /// Drops the active filter and returns the main panel to page 1.
    pub fn clear_filter(&mut self) -> Outcome {
        if self.filtered.is_empty() {
            return Outcome::Unchanged;
        }
        debug!("filter cleared");
        self.filtered.clear();
        self.main_pages.reset();
        self.sync_pages();
        Outcome::SearchReset
    }
}
