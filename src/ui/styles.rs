// UI Styles
// Color scheme and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Table ===

    pub fn title() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn header() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn row_selected() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row_normal() -> Style {
        Style::default()
    }

    pub fn row_dragged() -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    // === Edit mode ===

    pub fn edit_buffer() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn edit_cursor() -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    // === Row icons ===

    pub fn icon_edit() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn icon_delete() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn icon_commit() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn icon_cancel() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    // === Status bar ===

    pub fn status_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_dirty() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_clean() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }
}
