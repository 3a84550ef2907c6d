//! The dictionary screen: a search box above one or two paginated panels.
//!
//! [`App`] is a bubbletea-rs model. It owns the [`Dictionary`] and routes
//! key presses to the search input or to the focused panel, turning
//! dictionary warnings into a modal alert. Because
//! [`Model::init`](bubbletea_rs::Model::init) takes no arguments, the binary
//! hands the loaded dictionary over with [`configure`] before starting the
//! program.

mod keys;
mod style;
mod view;

#[cfg(test)]
mod tests;

pub use keys::AppKeyMap;
pub use style::{Styles, PANEL_WIDTH};

use crate::dictionary::{Dictionary, DictionaryError, Outcome, Panel, Variant};
use crate::help;
use crate::key::{self, KeyMap};
use crate::source::{BuiltinSource, NameSource};
use crate::textinput;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

/// Heading used when no title is configured.
pub const DEFAULT_TITLE: &str = "Animal Dictionary";

/// Everything the program needs to build its first [`App`].
#[derive(Debug, Clone)]
pub struct Launch {
    /// The seeded dictionary.
    pub dictionary: Dictionary,
    /// Heading shown above the search box.
    pub title: String,
}

static LAUNCH: OnceCell<Launch> = OnceCell::new();

/// Stores the launch state read by [`App::init`](BubbleTeaModel::init).
///
/// Returns false if the program was already configured.
pub fn configure(launch: Launch) -> bool {
    LAUNCH.set(launch).is_ok()
}

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The search input.
    Search,
    /// The main list.
    Main,
    /// The added list.
    Added,
}

impl Focus {
    /// The panel behind this focus target, if any.
    pub fn panel(self) -> Option<Panel> {
        match self {
            Focus::Search => None,
            Focus::Main => Some(Panel::Main),
            Focus::Added => Some(Panel::Added),
        }
    }
}

/// The application model.
#[derive(Debug, Clone)]
pub struct App {
    dictionary: Dictionary,
    title: String,
    input: textinput::Model,
    focus: Focus,
    main_cursor: usize,
    added_cursor: usize,
    alert: Option<String>,
    help: help::Model,
    keymap: AppKeyMap,
    styles: Styles,
    width: usize,
}

impl App {
    /// Creates the screen for `dictionary` with the search box focused.
    pub fn new(dictionary: Dictionary, title: impl Into<String>) -> Self {
        let keymap = AppKeyMap::for_variant(dictionary.variant());
        let mut input = textinput::new();
        input.set_placeholder(match dictionary.variant() {
            Variant::SplitPanel => "Search animals",
            Variant::InlineAdd => "Search or add an animal",
        });

        let mut app = Self {
            dictionary,
            title: title.into(),
            input,
            focus: Focus::Search,
            main_cursor: 0,
            added_cursor: 0,
            alert: None,
            help: help::Model::new(),
            keymap,
            styles: Styles::default(),
            width: 0,
        };
        app.set_focus(Focus::Search);
        app
    }

    /// The dictionary behind the screen.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The focused part of the screen.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The pending alert text, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// The current search text.
    pub fn search_text(&self) -> &str {
        self.input.value()
    }

    /// The name under the row cursor of `panel`.
    pub fn selected(&self, panel: Panel) -> Option<&String> {
        self.dictionary.panel_page(panel).get(self.cursor(panel))
    }

    fn cursor(&self, panel: Panel) -> usize {
        match panel {
            Panel::Main => self.main_cursor,
            Panel::Added => self.added_cursor,
        }
    }

    fn cursor_mut(&mut self, panel: Panel) -> &mut usize {
        match panel {
            Panel::Main => &mut self.main_cursor,
            Panel::Added => &mut self.added_cursor,
        }
    }

    fn focus_ring(&self) -> &'static [Focus] {
        match self.dictionary.variant() {
            Variant::SplitPanel => &[Focus::Search, Focus::Main, Focus::Added],
            Variant::InlineAdd => &[Focus::Search, Focus::Main],
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let ring = self.focus_ring();
        let at = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (at + 1) % ring.len()
        } else {
            (at + ring.len() - 1) % ring.len()
        };
        self.set_focus(ring[next]);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Search {
            self.input.focus();
            self.input.prompt_style = self.styles.search_focused.clone();
        } else {
            self.input.blur();
            self.input.prompt_style = self.styles.search_blurred.clone();
        }
    }

    fn show_warning(&mut self, err: DictionaryError) {
        warn!(error = %err, "showing alert");
        self.alert = Some(err.to_string());
    }

    fn apply(&mut self, outcome: Outcome) {
        if outcome == Outcome::SearchReset {
            self.input.reset();
            self.main_cursor = 0;
        }
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        for panel in [Panel::Main, Panel::Added] {
            let last = self.dictionary.panel_page(panel).len().saturating_sub(1);
            let cursor = self.cursor_mut(panel);
            *cursor = (*cursor).min(last);
        }
    }

    fn update_search(&mut self, msg: &Msg, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.search.matches(key_msg) {
            let query = self.input.value().to_string();
            match self.dictionary.search(&query) {
                Ok(outcome) => {
                    self.main_cursor = 0;
                    self.apply(outcome);
                }
                Err(err) => self.show_warning(err),
            }
        } else if self.keymap.insert.matches(key_msg) {
            let text = self.input.value().to_string();
            match self.dictionary.insert(&text) {
                Ok(outcome) => self.apply(outcome),
                Err(err) => self.show_warning(err),
            }
        } else if self.keymap.clear_search.matches(key_msg) {
            self.input.reset();
            let outcome = self.dictionary.clear_filter();
            self.apply(outcome);
        } else if self.input.update(msg) && self.input.is_empty() {
            let outcome = self.dictionary.clear_filter();
            self.apply(outcome);
        }
        None
    }

    fn update_panel(&mut self, panel: Panel, msg: &Msg, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.quit.matches(key_msg) {
            info!("quit requested");
            return Some(bubbletea_rs::quit());
        }

        if self.keymap.toggle_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        } else if self.keymap.focus_search.matches(key_msg) {
            self.set_focus(Focus::Search);
        } else if self.keymap.cursor_up.matches(key_msg) {
            let cursor = self.cursor_mut(panel);
            *cursor = cursor.saturating_sub(1);
        } else if self.keymap.cursor_down.matches(key_msg) {
            let rows = self.dictionary.panel_page(panel).len();
            let cursor = self.cursor_mut(panel);
            if *cursor + 1 < rows {
                *cursor += 1;
            }
        } else if panel == Panel::Main && self.keymap.add.matches(key_msg) {
            if let Some(name) = self.selected(panel).cloned() {
                let outcome = self.dictionary.move_to_added(&name);
                self.apply(outcome);
            }
        } else if self.keymap.delete.matches(key_msg) {
            if let Some(name) = self.selected(panel).cloned() {
                let outcome = match panel {
                    Panel::Main => self.dictionary.delete(&name),
                    Panel::Added => self.dictionary.delete_added(&name),
                };
                self.apply(outcome);
            }
        } else if self.dictionary.pages_mut(panel).update(msg) {
            debug!(?panel, page = self.dictionary.pages(panel).current(), "page changed");
            *self.cursor_mut(panel) = 0;
        }
        None
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let app = match LAUNCH.get() {
            Some(launch) => App::new(launch.dictionary.clone(), launch.title.clone()),
            None => {
                let names = BuiltinSource.load().unwrap_or_default();
                App::new(Dictionary::new(names, Variant::default()), DEFAULT_TITLE)
            }
        };
        info!(variant = %app.dictionary.variant(), "application started");
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            self.help.width = self.width;
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.force_quit.matches(key_msg) {
            info!("quit requested");
            return Some(bubbletea_rs::quit());
        }
        if self.alert.take().is_some() {
            debug!("alert dismissed");
            return None;
        }
        if self.keymap.next_focus.matches(key_msg) {
            self.cycle_focus(true);
            return None;
        }
        if self.keymap.prev_focus.matches(key_msg) {
            self.cycle_focus(false);
            return None;
        }

        match self.focus.panel() {
            None => self.update_search(&msg, key_msg),
            Some(panel) => self.update_panel(panel, &msg, key_msg),
        }
    }

    fn view(&self) -> String {
        self.render()
    }
}

impl KeyMap for App {
    fn short_help(&self) -> Vec<&key::Binding> {
        let k = &self.keymap;
        match self.focus {
            Focus::Search => vec![&k.search, &k.insert, &k.clear_search, &k.next_focus, &k.force_quit],
            Focus::Main | Focus::Added => {
                let pages = &self.dictionary.main_pages().keymap;
                let mut bindings = vec![
                    &k.cursor_up,
                    &k.cursor_down,
                    &pages.prev_page,
                    &pages.next_page,
                ];
                if self.focus == Focus::Main {
                    bindings.push(&k.add);
                }
                bindings.extend([&k.delete, &k.toggle_help, &k.quit]);
                bindings
            }
        }
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let k = &self.keymap;
        let pages = &self.dictionary.main_pages().keymap;
        vec![
            vec![&k.cursor_up, &k.cursor_down, &pages.prev_page, &pages.next_page],
            vec![&k.add, &k.delete, &k.focus_search],
            vec![&k.search, &k.insert, &k.clear_search],
            vec![&k.next_focus, &k.prev_focus, &k.toggle_help, &k.quit, &k.force_quit],
        ]
    }
}
