//! Key bindings for the dictionary screen.
//!
//! ## Search box
//! - `enter` search, `ctrl+n` add the typed name (inline-add), `esc` clear
//!
//! ## Panels
//! - `↑/k`, `↓/j` move between rows; page keys come from the paginator
//! - `enter`/`+` add (split-panel), `d`/`del` delete, `/` back to search
//!
//! ## Everywhere
//! - `tab`/`shift+tab` cycle focus, `?` help, `q` quit, `ctrl+c` force quit

use crate::dictionary::Variant;
use crate::key;

/// Application key map.
#[derive(Debug, Clone)]
pub struct AppKeyMap {
    /// Run the search in the search box.
    pub search: key::Binding,
    /// Insert the search text as a new name.
    pub insert: key::Binding,
    /// Clear the search box.
    pub clear_search: key::Binding,
    /// Move focus to the search box.
    pub focus_search: key::Binding,
    /// Next focus target.
    pub next_focus: key::Binding,
    /// Previous focus target.
    pub prev_focus: key::Binding,
    /// Row up.
    pub cursor_up: key::Binding,
    /// Row down.
    pub cursor_down: key::Binding,
    /// Move the selected name to the added panel.
    pub add: key::Binding,
    /// Delete the selected name.
    pub delete: key::Binding,
    /// Toggle the full help view.
    pub toggle_help: key::Binding,
    /// Quit from a panel.
    pub quit: key::Binding,
    /// Quit from anywhere.
    pub force_quit: key::Binding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            search: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "search"),
            ]),
            insert: key::new_binding(vec![
                key::with_keys_str(&["ctrl+n"]),
                key::with_help("ctrl+n", "add name"),
            ]),
            clear_search: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "clear"),
            ]),
            focus_search: key::new_binding(vec![
                key::with_keys_str(&["/"]),
                key::with_help("/", "search"),
            ]),
            next_focus: key::new_binding(vec![
                key::with_keys_str(&["tab"]),
                key::with_help("tab", "next pane"),
            ]),
            prev_focus: key::new_binding(vec![
                key::with_keys_str(&["shift+tab"]),
                key::with_help("shift+tab", "prev pane"),
            ]),
            cursor_up: key::new_binding(vec![
                key::with_keys_str(&["up", "k"]),
                key::with_help("↑/k", "up"),
            ]),
            cursor_down: key::new_binding(vec![
                key::with_keys_str(&["down", "j"]),
                key::with_help("↓/j", "down"),
            ]),
            add: key::new_binding(vec![
                key::with_keys_str(&["enter", "+"]),
                key::with_help("enter/+", "add"),
            ]),
            delete: key::new_binding(vec![
                key::with_keys_str(&["d", "delete"]),
                key::with_help("d/del", "delete"),
            ]),
            toggle_help: key::new_binding(vec![
                key::with_keys_str(&["?"]),
                key::with_help("?", "more"),
            ]),
            quit: key::new_binding(vec![
                key::with_keys_str(&["q"]),
                key::with_help("q", "quit"),
            ]),
            force_quit: key::new_binding(vec![
                key::with_keys_str(&["ctrl+c"]),
                key::with_help("ctrl+c", "quit"),
            ]),
        }
    }
}

impl AppKeyMap {
    /// Default bindings with the add actions enabled for `variant`.
    pub fn for_variant(variant: Variant) -> Self {
        let mut keys = Self::default();
        keys.insert.set_enabled(variant == Variant::InlineAdd);
        keys.add.set_enabled(variant == Variant::SplitPanel);
        keys
    }
}
