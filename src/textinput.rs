//! Single-line text input used for the search box.
//!
//! Editing works on grapheme clusters so that a backspace removes what the
//! user sees as one character. The input only reacts to keys while
//! focused; [`Model::update`] reports whether the value changed so the
//! owner can react to edits (the dictionary clears its filter whenever the
//! search text becomes empty).

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

/// Editing key bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move one character left.
    pub character_backward: key::Binding,
    /// Move one character right.
    pub character_forward: key::Binding,
    /// Jump to the start of the line.
    pub line_start: key::Binding,
    /// Jump to the end of the line.
    pub line_end: key::Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: key::Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: key::Binding,
    /// Delete the word before the cursor.
    pub delete_word_backward: key::Binding,
    /// Delete everything before the cursor.
    pub delete_before_cursor: key::Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            character_backward: key::new_binding(vec![
                key::with_keys_str(&["left", "ctrl+b"]),
                key::with_help("←", "character backward"),
            ]),
            character_forward: key::new_binding(vec![
                key::with_keys_str(&["right", "ctrl+f"]),
                key::with_help("→", "character forward"),
            ]),
            line_start: key::new_binding(vec![
                key::with_keys_str(&["home", "ctrl+a"]),
                key::with_help("home", "line start"),
            ]),
            line_end: key::new_binding(vec![
                key::with_keys_str(&["end", "ctrl+e"]),
                key::with_help("end", "line end"),
            ]),
            delete_character_backward: key::new_binding(vec![
                key::with_keys_str(&["backspace", "ctrl+h"]),
                key::with_help("backspace", "delete"),
            ]),
            delete_character_forward: key::new_binding(vec![
                key::with_keys_str(&["delete", "ctrl+d"]),
                key::with_help("del", "delete forward"),
            ]),
            delete_word_backward: key::new_binding(vec![
                key::with_keys_str(&["alt+backspace", "ctrl+w"]),
                key::with_help("ctrl+w", "delete word"),
            ]),
            delete_before_cursor: key::new_binding(vec![
                key::with_keys_str(&["ctrl+u"]),
                key::with_help("ctrl+u", "delete to start"),
            ]),
        }
    }
}

impl KeyMapTrait for KeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.delete_character_backward, &self.delete_word_backward]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.character_backward,
                &self.character_forward,
                &self.line_start,
                &self.line_end,
            ],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
                &self.delete_word_backward,
                &self.delete_before_cursor,
            ],
        ]
    }
}

/// Text input state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown before the value.
    pub prompt: String,
    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Maximum number of characters; 0 means unlimited.
    pub char_limit: usize,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style for the character under the cursor.
    pub cursor_style: Style,
    /// Editing key bindings.
    pub key_map: KeyMap,
    value: String,
    pos: usize,
    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            placeholder: String::new(),
            char_limit: 0,
            prompt_style: Style::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor_style: Style::new().reverse(true),
            key_map: KeyMap::default(),
            value: String::new(),
            pos: 0,
            focus: false,
        }
    }
}

/// Creates an unfocused, empty input.
pub fn new() -> Model {
    Model::default()
}

impl Model {
    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Replaces the value and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = if self.char_limit > 0 {
            s.graphemes(true).take(self.char_limit).collect()
        } else {
            s.to_string()
        };
        self.pos = self.len();
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.pos = self.len();
    }

    fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert_str(&mut self, s: &str) {
        let incoming = s.graphemes(true).count();
        if self.char_limit > 0 && self.len() + incoming > self.char_limit {
            return;
        }
        let at = self.byte_offset(self.pos);
        self.value.insert_str(at, s);
        self.pos += incoming;
    }

    fn delete_range(&mut self, from: usize, to: usize) {
        let start = self.byte_offset(from);
        let end = self.byte_offset(to);
        self.value.replace_range(start..end, "");
        self.pos = from;
    }

    fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let mut start = self.pos;
        while start > 0 && graphemes[start - 1].trim().is_empty() {
            start -= 1;
        }
        while start > 0 && !graphemes[start - 1].trim().is_empty() {
            start -= 1;
        }
        self.delete_range(start, self.pos);
    }

    /// Handles an editing key. Returns true if the value changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if !self.focus {
            return false;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };

        let before = self.value.len();
        let km = self.key_map.clone();
        if km.delete_word_backward.matches(key_msg) {
            self.delete_word_backward();
        } else if km.delete_before_cursor.matches(key_msg) {
            self.delete_range(0, self.pos);
        } else if km.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.delete_range(self.pos - 1, self.pos);
            }
        } else if km.delete_character_forward.matches(key_msg) {
            if self.pos < self.len() {
                let pos = self.pos;
                self.delete_range(pos, pos + 1);
            }
        } else if km.character_backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if km.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if km.line_start.matches(key_msg) {
            self.cursor_start();
        } else if km.line_end.matches(key_msg) {
            self.cursor_end();
        } else if let KeyCode::Char(c) = key_msg.key {
            let plain = key_msg.modifiers - KeyModifiers::SHIFT;
            if plain.is_empty() && !c.is_control() {
                self.insert_str(c.encode_utf8(&mut [0; 4]));
            }
        }
        self.value.len() != before
    }

    /// Renders the prompt, value and cursor.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.clone().inline(true).render(&self.prompt);
        if self.value.is_empty() {
            let placeholder = if self.focus {
                let mut chars = self.placeholder.chars();
                let first = chars.next().map(String::from).unwrap_or_else(|| " ".into());
                format!(
                    "{}{}",
                    self.cursor_style.clone().inline(true).render(&first),
                    self.placeholder_style
                        .clone()
                        .inline(true)
                        .render(chars.as_str())
                )
            } else {
                self.placeholder_style
                    .clone()
                    .inline(true)
                    .render(&self.placeholder)
            };
            return format!("{}{}", prompt, placeholder);
        }

        if !self.focus {
            return format!("{}{}", prompt, self.value);
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let before: String = graphemes[..self.pos].concat();
        let under = graphemes.get(self.pos).copied().unwrap_or(" ");
        let after: String = graphemes
            .get(self.pos + 1..)
            .map(|rest| rest.concat())
            .unwrap_or_default();
        format!(
            "{}{}{}{}",
            prompt,
            before,
            self.cursor_style.clone().inline(true).render(under),
            after
        )
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
