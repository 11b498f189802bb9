// Station Table Component
// Renders one row per entry, the edit buffer with its cursor, and the
// per-row icon cell

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row as TableRow, Table, TableState},
    Frame,
};

use crate::core::{App, RowMode};
use crate::ui::layout::ICON_COL_WIDTH;
use crate::ui::styles::Styles;

/// Render the list table
pub fn render_station_table(f: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let rows: Vec<TableRow> = app
        .entries
        .iter()
        .zip(app.rows.iter())
        .enumerate()
        .map(|(idx, (entry, row))| {
            let text_cell = match &row.mode {
                RowMode::Editing(session) => Cell::from(edit_line(&session.buffer, session.cursor)),
                RowMode::Viewing => Cell::from(Span::styled(entry.clone(), row_style(app, idx))),
            };
            TableRow::new(vec![text_cell, icon_cell(app, idx)])
        })
        .collect();

    let title = format!(" {} @ {} ", app.list_name, app.device_config.device.base_url);
    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(ICON_COL_WIDTH - 1),
        ],
    )
    .header(TableRow::new(vec![
        Cell::from(Span::styled("URL", Styles::header())),
        Cell::from(""),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .title(Span::styled(title, Styles::title())),
    );

    let mut state = TableState::default();
    state.select(Some(app.selected));
    f.render_stateful_widget(table, area, &mut state);
}

fn row_style(app: &App, idx: usize) -> ratatui::style::Style {
    if app.drag == Some(idx) {
        Styles::row_dragged()
    } else if app.selected == idx {
        Styles::row_selected()
    } else {
        Styles::row_normal()
    }
}

/// The provisional buffer with the cursor cell reversed
fn edit_line(buffer: &str, cursor: usize) -> Line<'static> {
    let before: String = buffer.chars().take(cursor).collect();
    let at: String = buffer.chars().skip(cursor).take(1).collect();
    let after: String = buffer.chars().skip(cursor + 1).collect();

    let cursor_cell = if at.is_empty() { " ".to_string() } else { at };

    Line::from(vec![
        Span::styled(before, Styles::edit_buffer()),
        Span::styled(cursor_cell, Styles::edit_cursor()),
        Span::styled(after, Styles::edit_buffer()),
    ])
}

/// Icon cell: edit/delete hints on the selected row, commit/cancel on
/// an editing row. Hints disappear everywhere while any row is editing.
fn icon_cell(app: &App, idx: usize) -> Cell<'static> {
    let row = &app.rows[idx];
    if row.is_editing() {
        return Cell::from(Line::from(vec![
            Span::styled("✔ ", Styles::icon_commit()),
            Span::styled("✖", Styles::icon_cancel()),
        ]));
    }
    if app.selected == idx && !app.icons_suppressed() {
        return Cell::from(Line::from(vec![
            Span::styled("✎ ", Styles::icon_edit()),
            Span::styled("✕", Styles::icon_delete()),
        ]));
    }
    Cell::from("")
}
