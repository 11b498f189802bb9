// UI module
// TUI components and views for the station manager

pub mod layout;
pub mod station_table;
pub mod status_bar;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use std::io::Stdout;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::core::{App, AppEvent, EventHandler};
use crate::operations::{DeviceClient, NetMessage};

pub use layout::{AppLayout, Hit};
pub use station_table::render_station_table;
pub use status_bar::render_status_bar;
pub use styles::Styles;

/// Render the whole application
pub fn render_app(f: &mut Frame, app: &App) {
    let layout = AppLayout::compute(f.area());
    render_station_table(f, app, layout.table);
    render_status_bar(f, app, layout.status);
}

/// Run the main application event loop. Network completions arrive on
/// an unbounded channel and are drained between terminal events, so
/// every mutation of the entry list happens on this loop.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &DeviceClient,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // The configuration page loads the list as soon as it opens
    client.spawn_load(tx.clone());

    loop {
        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle terminal events
        if event::poll(Duration::from_millis(app.config.ui.event_poll_ms))? {
            let size = terminal.size()?;
            let layout = AppLayout::compute(Rect::new(0, 0, size.width, size.height));
            let app_event = EventHandler::handle(event::read()?, app, &layout);

            handle_event(app, app_event, client, &tx);
        }

        // Drain finished network requests
        while let Ok(message) = rx.try_recv() {
            handle_net(app, message);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle an application event
fn handle_event(
    app: &mut App,
    event: AppEvent,
    client: &DeviceClient,
    tx: &UnboundedSender<NetMessage>,
) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::SelectPrevious => app.select_previous(),
        AppEvent::SelectNext => app.select_next(),
        AppEvent::MoveRowUp => app.move_selected_up(),
        AppEvent::MoveRowDown => app.move_selected_down(),
        AppEvent::Add => app.add(),
        AppEvent::EditToggle(idx) => app.click_edit_icon(idx),
        AppEvent::DeletePress(idx) => {
            app.press_delete_icon(idx);
        }
        AppEvent::DeleteRelease(idx) => app.release_delete_icon(idx),
        AppEvent::Delete(idx) => app.click_delete_icon(idx),
        AppEvent::CommitEdit => app.commit_current_edit(),
        AppEvent::FocusLost => app.focus_lost(),
        AppEvent::Input(chr) => app.input_char(chr),
        AppEvent::Backspace => app.input_backspace(),
        AppEvent::CursorLeft => app.input_cursor_left(),
        AppEvent::CursorRight => app.input_cursor_right(),
        AppEvent::DragStart(idx) => app.drag_start(idx),
        AppEvent::DragOver(idx) => app.drag_over(idx),
        AppEvent::DragEnd => app.drag_end(),
        AppEvent::Reload => client.spawn_load(tx.clone()),
        AppEvent::Save => {
            if app.save_enabled() {
                client.spawn_save(app.serialize(), tx.clone());
            }
        }
        AppEvent::None => {}
    }
}

/// Apply a finished network request to the application state
fn handle_net(app: &mut App, message: NetMessage) {
    match message {
        NetMessage::Loaded(body) => app.apply_loaded(&body),
        NetMessage::LoadFailed(text) => app.apply_load_failure(text),
        NetMessage::Saved(text) => app.apply_save_response(text),
    }
}
