//! Help line generated from key bindings.
//!
//! The help component renders the bindings exposed by a [`KeyMap`] either
//! as a single bullet-separated line or, with `show_all`, as aligned
//! columns. Disabled bindings are hidden and the output is truncated with
//! an ellipsis when a width limit is set.

use crate::key::{self, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the truncation ellipsis.
    pub ellipsis: Style,
    /// Key label in the short view.
    pub short_key: Style,
    /// Description in the short view.
    pub short_desc: Style,
    /// Bullet between short-view entries.
    pub short_separator: Style,
    /// Key label in the full view.
    pub full_key: Style,
    /// Description in the full view.
    pub full_desc: Style,
    /// Gap between full-view columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The help model.
///
/// ```rust
/// use animal_dictionary::help::Model;
/// use animal_dictionary::key::{Binding, KeyMap};
/// use crossterm::event::KeyCode;
///
/// struct Keys {
///     quit: Binding,
/// }
///
/// impl KeyMap for Keys {
///     fn short_help(&self) -> Vec<&Binding> {
///         vec![&self.quit]
///     }
///     fn full_help(&self) -> Vec<Vec<&Binding>> {
///         vec![vec![&self.quit]]
///     }
/// }
///
/// let keys = Keys { quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit") };
/// let line = Model::new().view(&keys);
/// assert!(line.contains("quit"));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full column view instead of the single line.
    pub show_all: bool,
    /// Maximum width; 0 disables truncation.
    pub width: usize,
    /// Separator between short-view entries.
    pub short_separator: String,
    /// Separator between full-view columns.
    pub full_separator: String,
    /// Marker shown when content is truncated.
    pub ellipsis: String,
    /// Visual styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the help for `keymap` in the current mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line separated by bullets.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut builder = String::new();
        let mut total_width = 0;
        for kb in bindings.iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.should_add_item(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item);
        }
        builder
    }

    /// Renders binding groups as aligned columns.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;
        for group in groups.iter().filter(|g| should_render_column(g)) {
            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc)
                    )
                })
                .collect();
            let column = rows.join("\n");
            let sep_width = if columns.is_empty() {
                0
            } else {
                lipgloss::width_visible(&separator)
            };
            let column_width = lipgloss::width_visible(&column) + sep_width;

            if let Some(tail) = self.should_add_item(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += column_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    fn should_add_item(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width > 0 && total_width + item_width > self.width {
            let tail = format!(
                " {}",
                self.styles
                    .ellipsis
                    .clone()
                    .inline(true)
                    .render(&self.ellipsis)
            );
            if total_width + lipgloss::width_visible(&tail) < self.width {
                return Some(tail);
            }
            return Some(String::new());
        }
        None
    }
}

/// Returns true if at least one binding in the column is enabled.
pub fn should_render_column(bindings: &[&key::Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Keys {
        up: key::Binding,
        down: key::Binding,
        hidden: key::Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&key::Binding> {
            vec![&self.up, &self.hidden, &self.down]
        }
        fn full_help(&self) -> Vec<Vec<&key::Binding>> {
            vec![vec![&self.up, &self.down], vec![&self.hidden]]
        }
    }

    fn keys() -> Keys {
        Keys {
            up: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            down: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            hidden: key::Binding::new(vec![KeyCode::Delete])
                .with_help("del", "secret")
                .with_disabled(),
        }
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn short_view_skips_disabled_bindings() {
        let out = plain(&Model::new().view(&keys()));
        assert_eq!(out, "↑ up • ↓ down");
    }

    #[test]
    fn full_view_drops_disabled_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let out = plain(&help.view(&keys()));
        assert!(out.contains("up"));
        assert!(out.contains("down"));
        assert!(!out.contains("secret"));
    }

    #[test]
    fn narrow_width_truncates() {
        let out = plain(&Model::new().with_width(8).view(&keys()));
        assert!(out.starts_with("↑ up"));
        assert!(!out.contains("down"));
    }
}
