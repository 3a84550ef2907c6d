//! Small value types shared by the dictionary and its front end.

use serde::Deserialize;
use std::fmt;

/// Which behaviour the dictionary follows for adding names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Adding moves a listed name into a second "added" panel.
    #[default]
    SplitPanel,
    /// Adding inserts the search text at the front of the single list.
    InlineAdd,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::SplitPanel => write!(f, "split-panel"),
            Variant::InlineAdd => write!(f, "inline-add"),
        }
    }
}

/// One of the two paginated lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// The master list, or the filtered view while a filter is active.
    Main,
    /// Names moved out of the master list.
    Added,
}

/// What a successful operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Unchanged,
    /// Lists or pages changed; the search text stays.
    Updated,
    /// The filter was dropped and the search text must be cleared.
    SearchReset,
}

/// Case-insensitive name identity.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
