//! Rendering for [`App`].

use super::style::PANEL_WIDTH;
use super::App;
use crate::dictionary::{Panel, Variant};
use crate::paginator::PAGE_SIZE;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

const ADDED_PLACEHOLDER: &str = "Press enter on an animal to add it here";
const EMPTY_PLACEHOLDER: &str = "No animals listed";

impl App {
    pub(super) fn render(&self) -> String {
        let mut sections = vec![
            self.styles.title.clone().render(&self.title),
            String::new(),
            self.input.view(),
            String::new(),
            self.render_panels(),
            self.render_status(),
        ];

        if let Some(alert) = &self.alert {
            let body = format!("{alert}\n\nPress any key to continue");
            sections.push(self.styles.alert.clone().render(&body));
        }

        sections.push(self.styles.help.clone().render(&self.help.view(self)));
        sections.join("\n")
    }

    fn render_panels(&self) -> String {
        let main = self.render_panel(Panel::Main);
        match self.dictionary.variant() {
            Variant::SplitPanel => {
                let added = self.render_panel(Panel::Added);
                lipgloss::join_horizontal(lipgloss::TOP, &[main.as_str(), "  ", added.as_str()])
            }
            Variant::InlineAdd => main,
        }
    }

    fn render_panel(&self, panel: Panel) -> String {
        let focused = self.focus.panel() == Some(panel);
        let items = self.dictionary.panel_page(panel);

        let heading = match panel {
            Panel::Main if self.dictionary.is_filtering() => {
                format!("Matches ({})", self.dictionary.filtered().len())
            }
            Panel::Main => "Animals".to_string(),
            Panel::Added => "Added".to_string(),
        };
        let mut lines = vec![
            self.styles.panel_title.clone().inline(true).render(&heading),
            String::new(),
        ];

        if items.is_empty() {
            let text = match panel {
                Panel::Main => EMPTY_PLACEHOLDER,
                Panel::Added => ADDED_PLACEHOLDER,
            };
            lines.push(self.styles.placeholder.clone().inline(true).render(text));
        }

        for (i, name) in items.iter().enumerate() {
            let label = capitalize(name);
            if focused && i == self.cursor(panel) {
                lines.push(format!(
                    "› {}",
                    self.styles.selected_row.clone().inline(true).render(&label)
                ));
            } else {
                lines.push(format!(
                    "  {}",
                    self.styles.row.clone().inline(true).render(&label)
                ));
            }
        }

        // Keep the frame height stable across pages.
        while lines.len() < PAGE_SIZE + 2 {
            lines.push(String::new());
        }

        if panel == Panel::Main || self.dictionary.added().len() > PAGE_SIZE {
            lines.push(String::new());
            lines.push(self.render_pager(panel));
        }

        let frame = if focused {
            &self.styles.panel_focused
        } else {
            &self.styles.panel_blurred
        };
        frame
            .clone()
            .width(PANEL_WIDTH as i32)
            .render(&lines.join("\n"))
    }

    fn render_pager(&self, panel: Panel) -> String {
        let pages = self.dictionary.pages(panel);
        let control = |enabled: bool, text: &str| {
            let style = if enabled {
                &self.styles.control
            } else {
                &self.styles.control_disabled
            };
            style.clone().inline(true).render(text)
        };
        format!(
            "{}  {}  {}",
            control(pages.can_prev(), "‹ Prev"),
            pages.view(),
            control(pages.can_next(), "Next ›")
        )
    }

    fn render_status(&self) -> String {
        let mut status = format!("{} animals", self.dictionary.master().len());
        if self.dictionary.variant() == Variant::SplitPanel {
            status.push_str(&format!(" • {} added", self.dictionary.added().len()));
        }
        if self.dictionary.is_filtering() {
            status.push_str(&format!(" • {} matches", self.dictionary.filtered().len()));
        }
        self.styles.status.clone().inline(true).render(&status)
    }
}

/// Upper-cases the first letter of every word.
pub(super) fn capitalize(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
