// Status Bar Component
// Device status text on the first line, key bindings on the second

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::App;
use crate::ui::styles::Styles;

/// Render the status text and the bindings footer
pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let save_state = if app.save_enabled() {
        Span::styled(" [unsaved changes] ", Styles::status_dirty())
    } else {
        Span::styled(" [saved] ", Styles::status_clean())
    };

    let status = Line::from(vec![
        save_state,
        Span::styled(app.status.clone().unwrap_or_default(), Styles::status_text()),
    ]);

    let bindings = if app.editing_row().is_some() {
        " Enter save entry   Esc cancel "
    } else {
        " a add   e edit   d delete   Shift+↑/↓ move   s save   r reload   q quit "
    };

    let footer = Line::from(Span::styled(bindings, Styles::footer()));

    f.render_widget(Paragraph::new(vec![status, footer]), area);
}
