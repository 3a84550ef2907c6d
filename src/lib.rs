//! # animal-dictionary
//!
//! A terminal dictionary of animal names built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs). Names can be
//! searched by case-insensitive substring, paged through ten at a time,
//! added and deleted.
//!
//! ## Overview
//!
//! The crate is split into a synchronous store and a thin front end:
//!
//! - [`dictionary`]: the master list, the filtered view of the last search,
//!   the added list and the page state of both panels.
//! - [`app`]: the bubbletea-rs model that routes key presses to the store
//!   and renders it.
//! - [`paginator`], [`textinput`], [`help`] and [`key`]: the components the
//!   screen is made of.
//! - [`source`], [`settings`], [`cli`] and [`logging`]: startup plumbing.
//!
//! ## Variants
//!
//! Two behaviours for adding names are supported, picked with
//! `--variant` or the `variant` setting:
//!
//! | Variant | Adding a name |
//! |---------|---------------|
//! | `split-panel` (default) | Moves the selected name into a second "added" panel |
//! | `inline-add` | Inserts the search text at the front of the list |
//!
//! ## Using the store directly
//!
//! ```rust
//! use animal_dictionary::dictionary::{Dictionary, Outcome, Variant};
//!
//! let names = ["Cat", "Wildcat", "Dog"].map(String::from).to_vec();
//! let mut dict = Dictionary::new(names, Variant::SplitPanel);
//!
//! assert_eq!(dict.search("CAT"), Ok(Outcome::Updated));
//! assert_eq!(dict.page_items(), &["Cat", "Wildcat"]);
//!
//! dict.move_to_added("wildcat");
//! assert_eq!(dict.added(), &["Wildcat"]);
//! ```

pub mod app;
pub mod cli;
pub mod dictionary;
pub mod help;
pub mod key;
pub mod logging;
pub mod paginator;
pub mod settings;
pub mod source;
pub mod textinput;

use bubbletea_rs::Cmd;

/// Keyboard focus for components that only react while focused.
///
/// ```rust
/// use animal_dictionary::prelude::*;
///
/// let mut input = textinput_new();
/// assert!(!input.focused());
///
/// input.focus();
/// assert!(input.focused());
///
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use app::{App, Launch};
pub use dictionary::{Dictionary, DictionaryError, Outcome, Panel, Variant};
pub use help::Model as HelpModel;
pub use key::{matches, new_binding, with_help, with_keys_str, Binding, KeyMap, KeyPress};
pub use paginator::{Model as Paginator, PAGE_SIZE};
pub use settings::{LoggingSettings, Settings, SettingsError};
pub use source::{BuiltinSource, FileSource, NameSource, SourceError};
pub use textinput::{new as textinput_new, Model as TextInput};

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::app::{App, Focus, Launch};
    pub use crate::dictionary::{Dictionary, DictionaryError, Outcome, Panel, Variant};
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::paginator::{Model as Paginator, PAGE_SIZE};
    pub use crate::source::{BuiltinSource, FileSource, NameSource};
    pub use crate::textinput::{new as textinput_new, Model as TextInput};
    pub use crate::Component;
}
