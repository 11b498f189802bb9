// Event Handling
// Maps terminal events onto application events. The mapping is
// mode-aware: while a row is editing, keys feed the edit buffer, and
// mouse geometry decides between icon clicks, row clicks and drags.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::App;
use crate::ui::{AppLayout, Hit};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Move selection up
    SelectPrevious,

    /// Move selection down
    SelectNext,

    /// Transpose the selected row with its upper neighbour
    MoveRowUp,

    /// Transpose the selected row with its lower neighbour
    MoveRowDown,

    /// Append an empty row and open it for editing
    Add,

    /// Edit icon click: open an edit, or commit the running one
    EditToggle(usize),

    /// Mouse-down phase of a delete icon click
    DeletePress(usize),

    /// Click phase of a delete icon click
    DeleteRelease(usize),

    /// Keyboard delete (both phases)
    Delete(usize),

    /// Commit the in-progress edit (Enter)
    CommitEdit,

    /// The editing row lost focus without a commit trigger
    FocusLost,

    /// Character typed into the edit buffer
    Input(char),

    /// Remove the character before the cursor
    Backspace,

    /// Move the edit cursor
    CursorLeft,
    CursorRight,

    /// Begin dragging a row (also how a row click selects)
    DragStart(usize),

    /// Drag cursor moved over a row
    DragOver(usize),

    /// Drag finished
    DragEnd,

    /// Request a fresh list from the device
    Reload,

    /// Send the list to the device
    Save,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event, app: &App, layout: &AppLayout) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key, app),
            Event::Mouse(mouse) => Self::handle_mouse(mouse, app, layout),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent, app: &App) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        // Ctrl-C quits in any mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppEvent::Quit;
        }

        if app.editing_row().is_some() {
            return Self::handle_edit_key(key);
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,

            // Row reordering
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => AppEvent::MoveRowUp,
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => AppEvent::MoveRowDown,
            KeyCode::Char('K') => AppEvent::MoveRowUp,
            KeyCode::Char('J') => AppEvent::MoveRowDown,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => AppEvent::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::SelectNext,

            // List mutation
            KeyCode::Char('a') => AppEvent::Add,
            KeyCode::Enter | KeyCode::Char('e') => AppEvent::EditToggle(app.selected),
            KeyCode::Delete | KeyCode::Char('d') => AppEvent::Delete(app.selected),

            // Device round trips
            KeyCode::Char('s') => AppEvent::Save,
            KeyCode::Char('r') => AppEvent::Reload,

            _ => AppEvent::None,
        }
    }

    /// Keys while a row is in edit mode feed the edit session
    fn handle_edit_key(key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Enter => AppEvent::CommitEdit,
            KeyCode::Esc => AppEvent::FocusLost,
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Left => AppEvent::CursorLeft,
            KeyCode::Right => AppEvent::CursorRight,
            KeyCode::Char(chr) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppEvent::Input(chr)
            }
            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent, app: &App, layout: &AppLayout) -> AppEvent {
        let hit = layout.hit(mouse.column, mouse.row, app.rows.len());

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit {
                // The edit icon suppresses focus loss on mouse-down;
                // its action runs on the click (mouse-up)
                Hit::EditIcon(_) => AppEvent::None,
                Hit::DeleteIcon(idx) => AppEvent::DeletePress(idx),
                Hit::Row(idx) => AppEvent::DragStart(idx),
                Hit::Table | Hit::Outside => AppEvent::FocusLost,
            },
            MouseEventKind::Drag(MouseButton::Left) => match hit {
                Hit::Row(idx) | Hit::EditIcon(idx) | Hit::DeleteIcon(idx) => {
                    AppEvent::DragOver(idx)
                }
                _ => AppEvent::None,
            },
            MouseEventKind::Up(MouseButton::Left) => {
                if app.drag.is_some() {
                    AppEvent::DragEnd
                } else {
                    match hit {
                        Hit::EditIcon(idx) => AppEvent::EditToggle(idx),
                        Hit::DeleteIcon(idx) => AppEvent::DeleteRelease(idx),
                        _ => AppEvent::None,
                    }
                }
            }
            MouseEventKind::ScrollUp => AppEvent::SelectPrevious,
            MouseEventKind::ScrollDown => AppEvent::SelectNext,
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppConfig, DeviceConfig};
    use ratatui::layout::Rect;

    fn fixture() -> (App, AppLayout) {
        let mut app = App::new(
            AppConfig::default(),
            DeviceConfig::default(),
            "stations".to_string(),
        );
        app.apply_loaded("A\r\nB\r\nC");
        (app, AppLayout::compute(Rect::new(0, 0, 40, 12)))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_viewing_keys() {
        let (app, layout) = fixture();
        assert_eq!(
            EventHandler::handle(key(KeyCode::Char('q')), &app, &layout),
            AppEvent::Quit
        );
        assert_eq!(
            EventHandler::handle(key(KeyCode::Char('a')), &app, &layout),
            AppEvent::Add
        );
        assert_eq!(
            EventHandler::handle(key(KeyCode::Enter), &app, &layout),
            AppEvent::EditToggle(0)
        );
        assert_eq!(
            EventHandler::handle(key(KeyCode::Char('d')), &app, &layout),
            AppEvent::Delete(0)
        );
    }

    #[test]
    fn test_editing_keys_feed_the_buffer() {
        let (mut app, layout) = fixture();
        app.click_edit_icon(1);
        assert_eq!(
            EventHandler::handle(key(KeyCode::Char('q')), &app, &layout),
            AppEvent::Input('q')
        );
        assert_eq!(
            EventHandler::handle(key(KeyCode::Enter), &app, &layout),
            AppEvent::CommitEdit
        );
        assert_eq!(
            EventHandler::handle(key(KeyCode::Esc), &app, &layout),
            AppEvent::FocusLost
        );
    }

    #[test]
    fn test_shift_arrows_reorder() {
        let (app, layout) = fixture();
        let event = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT));
        assert_eq!(
            EventHandler::handle(event, &app, &layout),
            AppEvent::MoveRowUp
        );
    }

    #[test]
    fn test_mouse_down_on_row_starts_drag() {
        let (app, layout) = fixture();
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 4, 3);
        assert_eq!(EventHandler::handle(event, &app, &layout), AppEvent::DragStart(1));
    }

    #[test]
    fn test_mouse_up_on_icons_without_drag() {
        let (app, layout) = fixture();
        let up_edit = mouse(MouseEventKind::Up(MouseButton::Left), 33, 2);
        assert_eq!(
            EventHandler::handle(up_edit, &app, &layout),
            AppEvent::EditToggle(0)
        );
        let up_delete = mouse(MouseEventKind::Up(MouseButton::Left), 37, 2);
        assert_eq!(
            EventHandler::handle(up_delete, &app, &layout),
            AppEvent::DeleteRelease(0)
        );
    }

    #[test]
    fn test_mouse_up_while_dragging_ends_drag() {
        let (mut app, layout) = fixture();
        app.drag_start(0);
        let event = mouse(MouseEventKind::Up(MouseButton::Left), 33, 2);
        assert_eq!(EventHandler::handle(event, &app, &layout), AppEvent::DragEnd);
    }

    #[test]
    fn test_mouse_down_outside_blurs() {
        let (app, layout) = fixture();
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 4, 11);
        assert_eq!(EventHandler::handle(event, &app, &layout), AppEvent::FocusLost);
    }
}
