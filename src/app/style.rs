//! Styles for the dictionary screen.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Width of one panel's content, in columns.
pub const PANEL_WIDTH: usize = 44;

/// All styles used by the view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading.
    pub title: Style,
    /// Search box when it has focus.
    pub search_focused: Style,
    /// Search box without focus.
    pub search_blurred: Style,
    /// Panel frame when focused.
    pub panel_focused: Style,
    /// Panel frame without focus.
    pub panel_blurred: Style,
    /// Panel heading.
    pub panel_title: Style,
    /// An unselected row.
    pub row: Style,
    /// The selected row of the focused panel.
    pub selected_row: Style,
    /// Enabled page control.
    pub control: Style,
    /// Disabled page control.
    pub control_disabled: Style,
    /// Text shown in an empty panel.
    pub placeholder: Style,
    /// Alert box.
    pub alert: Style,
    /// Status line.
    pub status: Style,
    /// Help line.
    pub help: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let accent = Color::from("#3B82F6");

        let panel = Style::new()
            .border_style(lipgloss::rounded_border())
            .border_top(true)
            .border_bottom(true)
            .border_left(true)
            .border_right(true)
            .padding(0, 1, 0, 1);

        Self {
            title: Style::new()
                .bold(true)
                .foreground(Color::from("230"))
                .background(Color::from("62"))
                .padding(0, 1, 0, 1),
            search_focused: Style::new().foreground(accent.clone()),
            search_blurred: Style::new().foreground(subdued.clone()),
            panel_focused: panel.clone().border_foreground(accent.clone()),
            panel_blurred: panel.border_foreground(subdued.clone()),
            panel_title: Style::new().bold(true),
            row: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            selected_row: Style::new().foreground(Color::from("#EE6FF8")).bold(true),
            control: Style::new().foreground(accent),
            control_disabled: Style::new().foreground(subdued.clone()).faint(true),
            placeholder: Style::new().foreground(subdued.clone()).italic(true),
            alert: Style::new()
                .border_style(lipgloss::rounded_border())
                .border_top(true)
                .border_bottom(true)
                .border_left(true)
                .border_right(true)
                .border_foreground(Color::from("#F59E0B"))
                .foreground(Color::from("#F59E0B"))
                .padding(0, 2, 0, 2),
            status: Style::new().foreground(subdued),
            help: Style::new().padding(1, 0, 0, 0),
        }
    }
}
