// Application State
// The entry list and the row records that mirror it, plus every
// mutation the editor supports (add, edit, delete, drag reorder)

use tracing::{debug, trace};

use crate::core::{AppConfig, DeviceConfig};
use crate::operations::codec;

/// Explicit intent registered by a control click before an in-progress
/// edit resolves. Replaces the browser original's reliance on the
/// blur-after-click microtask ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditIntent {
    None,
    Commit,
    Cancel,
}

/// An in-progress edit on one row
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Text restored when the edit is cancelled
    pub rollback: String,

    /// Provisional cell content, committed into the entry list on save
    pub buffer: String,

    /// Cursor position in characters
    pub cursor: usize,

    /// Row was created by Add and never committed; cancelling removes it
    pub fresh: bool,

    /// Intent consumed when the edit resolves
    pub intent: EditIntent,
}

impl EditSession {
    fn new(text: &str, fresh: bool) -> Self {
        Self {
            rollback: text.to_string(),
            buffer: text.to_string(),
            cursor: text.chars().count(),
            fresh,
            intent: EditIntent::None,
        }
    }

    /// Byte offset of the cursor within the buffer
    fn byte_pos(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert(&mut self, chr: char) {
        self.buffer.insert(self.byte_pos(), chr);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove(self.byte_pos());
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }
}

/// Per-row lifecycle: a row views its entry until an edit opens on it
#[derive(Debug, Clone)]
pub enum RowMode {
    Viewing,
    Editing(EditSession),
}

/// A rendered row record. Rows are created and destroyed with their
/// entries and move (not recreated) on reorder; only a full load
/// rebuilds them all.
#[derive(Debug, Clone)]
pub struct Row {
    pub mode: RowMode,

    /// Suppresses the delete click arriving right after a
    /// cancel-via-delete-icon resolved the edit on this row
    pub pending_delete_cancel: bool,
}

impl Row {
    fn new() -> Self {
        Self {
            mode: RowMode::Viewing,
            pending_delete_cancel: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing(_))
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (built-in defaults)
    pub config: AppConfig,

    /// Device configuration (address, lists, save policy)
    pub device_config: DeviceConfig,

    /// Name of the list being edited ("stations", "wifi", ...)
    pub list_name: String,

    /// Ordered entry list, index = row position
    pub entries: Vec<String>,

    /// Row records mirroring the entry list
    pub rows: Vec<Row>,

    /// Selected row index
    pub selected: usize,

    /// Row currently being dragged, if a drag is in progress
    pub drag: Option<usize>,

    /// Unsaved changes exist; gates the save action
    pub dirty: bool,

    /// Status text from the last save response or load failure
    pub status: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance with an empty list
    pub fn new(config: AppConfig, device_config: DeviceConfig, list_name: String) -> Self {
        Self {
            config,
            device_config,
            list_name,
            entries: Vec::new(),
            rows: Vec::new(),
            selected: 0,
            drag: None,
            dirty: false,
            status: None,
            should_quit: false,
        }
    }

    fn allow_empty_save(&self) -> bool {
        self.device_config.policy.allow_empty_save
    }

    /// Whether the save action is currently available
    pub fn save_enabled(&self) -> bool {
        self.dirty
    }

    /// Index of the row in edit mode, if any
    pub fn editing_row(&self) -> Option<usize> {
        self.rows.iter().position(Row::is_editing)
    }

    /// Row icon hints are hidden everywhere while any row is editing
    pub fn icons_suppressed(&self) -> bool {
        self.editing_row().is_some()
    }

    // === Load / save ===

    /// Replace the entry list with a freshly loaded body and rebuild
    /// every row record
    pub fn apply_loaded(&mut self, body: &str) {
        self.entries = codec::parse_list(body);
        self.rows = self.entries.iter().map(|_| Row::new()).collect();
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        self.drag = None;
        self.dirty = false;
        debug!("loaded {} entries for list '{}'", self.entries.len(), self.list_name);
    }

    /// A load request finished without a body; the list stays untouched
    pub fn apply_load_failure(&mut self, text: String) {
        self.status = Some(text);
    }

    /// Serialize the entry list for the save endpoint
    pub fn serialize(&self) -> String {
        codec::serialize_list(&self.entries)
    }

    /// A save response arrived: show its text verbatim and disable
    /// save, whatever the text says
    pub fn apply_save_response(&mut self, text: String) {
        self.status = Some(text);
        self.dirty = false;
    }

    // === Selection ===

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        let max = self.rows.len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    // === Add / edit lifecycle ===

    /// Append an empty entry and open it for editing. The dirty flag is
    /// untouched until the edit commits.
    pub fn add(&mut self) {
        self.resolve_any_edit();
        self.entries.push(String::new());
        self.rows.push(Row::new());
        let idx = self.rows.len() - 1;
        self.selected = idx;
        self.open_edit(idx, true);
    }

    fn open_edit(&mut self, idx: usize, fresh: bool) {
        let session = EditSession::new(&self.entries[idx], fresh);
        self.rows[idx].mode = RowMode::Editing(session);
        trace!("edit opened on row {idx} (fresh: {fresh})");
    }

    /// Commit the edit on `idx` into the entry list
    fn commit_edit(&mut self, idx: usize) {
        if let RowMode::Editing(session) = &self.rows[idx].mode {
            self.entries[idx] = session.buffer.clone();
            self.rows[idx].mode = RowMode::Viewing;
            self.dirty = true;
            self.status = None;
            trace!("edit committed on row {idx}");
        }
    }

    /// Cancel the edit on `idx`. A fresh row is removed outright and
    /// the return value reports it; an existing row keeps its entry.
    fn cancel_edit(&mut self, idx: usize) -> bool {
        if let RowMode::Editing(session) = &self.rows[idx].mode {
            if session.fresh {
                self.entries.remove(idx);
                self.rows.remove(idx);
                self.selected = self.selected.min(self.rows.len().saturating_sub(1));
                trace!("fresh row {idx} discarded");
                return true;
            }
            self.rows[idx].mode = RowMode::Viewing;
            trace!("edit cancelled on row {idx}");
        }
        false
    }

    /// Resolve the edit on `idx` by consuming its intent. Focus loss
    /// without an explicit commit trigger cancels. Returns true when
    /// the resolution removed the row.
    fn resolve_edit(&mut self, idx: usize) -> bool {
        let intent = match &self.rows[idx].mode {
            RowMode::Editing(session) => session.intent,
            RowMode::Viewing => return false,
        };
        match intent {
            EditIntent::Commit => {
                self.commit_edit(idx);
                false
            }
            EditIntent::Cancel | EditIntent::None => self.cancel_edit(idx),
        }
    }

    /// Resolve whichever row is editing, adjusting `idx` for a removed
    /// row that sat before it. Returns the adjusted index.
    fn resolve_other_edit(&mut self, idx: usize) -> usize {
        if let Some(editing) = self.editing_row() {
            if editing != idx && self.resolve_edit(editing) && editing < idx {
                return idx - 1;
            }
        }
        idx
    }

    fn resolve_any_edit(&mut self) {
        if let Some(editing) = self.editing_row() {
            self.resolve_edit(editing);
        }
    }

    /// Focus moved away from the table (click outside, Escape)
    pub fn focus_lost(&mut self) {
        self.resolve_any_edit();
    }

    /// Enter key while editing commits directly
    pub fn commit_current_edit(&mut self) {
        if let Some(idx) = self.editing_row() {
            self.commit_edit(idx);
        }
    }

    /// Edit icon click: opens an edit on a viewing row, commits on an
    /// editing one
    pub fn click_edit_icon(&mut self, idx: usize) {
        if idx >= self.rows.len() {
            return;
        }
        if self.rows[idx].is_editing() {
            if let RowMode::Editing(session) = &mut self.rows[idx].mode {
                session.intent = EditIntent::Commit;
            }
            self.resolve_edit(idx);
            return;
        }
        let idx = self.resolve_other_edit(idx);
        self.selected = idx;
        self.open_edit(idx, false);
    }

    /// Mouse-down phase of a delete icon click. On an editing row this
    /// registers a cancel, resolves the edit, and arms
    /// `pending_delete_cancel` so the release phase does not delete.
    /// Returns the row's index after any edit resolution shifted it.
    pub fn press_delete_icon(&mut self, idx: usize) -> usize {
        if idx >= self.rows.len() {
            return idx;
        }
        if self.rows[idx].is_editing() {
            if let RowMode::Editing(session) = &mut self.rows[idx].mode {
                session.intent = EditIntent::Cancel;
            }
            if !self.resolve_edit(idx) {
                self.rows[idx].pending_delete_cancel = true;
            }
            idx
        } else {
            self.resolve_other_edit(idx)
        }
    }

    /// Click phase of a delete icon click: a just-cancelled row
    /// swallows the click, anything else is deleted
    pub fn release_delete_icon(&mut self, idx: usize) {
        if idx >= self.rows.len() {
            return;
        }
        if self.rows[idx].pending_delete_cancel {
            self.rows[idx].pending_delete_cancel = false;
            return;
        }
        if self.rows[idx].is_editing() {
            return;
        }
        self.delete_row(idx);
    }

    /// Keyboard delete runs both phases back to back
    pub fn click_delete_icon(&mut self, idx: usize) {
        let idx = self.press_delete_icon(idx);
        self.release_delete_icon(idx);
    }

    /// Remove row and entry at `idx`. Deleting the last entry leaves
    /// nothing worth saving, so the dirty flag follows the empty-save
    /// policy.
    fn delete_row(&mut self, idx: usize) {
        self.entries.remove(idx);
        self.rows.remove(idx);
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        self.dirty = !self.entries.is_empty() || self.allow_empty_save();
        debug!("row {idx} deleted, {} entries remain", self.entries.len());
    }

    // === Edit input ===

    fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.rows.iter_mut().find_map(|row| match &mut row.mode {
            RowMode::Editing(session) => Some(session),
            RowMode::Viewing => None,
        })
    }

    pub fn input_char(&mut self, chr: char) {
        if let Some(session) = self.session_mut() {
            session.insert(chr);
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some(session) = self.session_mut() {
            session.backspace();
        }
    }

    pub fn input_cursor_left(&mut self) {
        if let Some(session) = self.session_mut() {
            session.cursor_left();
        }
    }

    pub fn input_cursor_right(&mut self) {
        if let Some(session) = self.session_mut() {
            session.cursor_right();
        }
    }

    // === Reorder ===

    /// A row click or drag start: any in-progress edit on another row
    /// loses focus first, then the selection moves
    pub fn drag_start(&mut self, idx: usize) {
        if idx >= self.rows.len() {
            return;
        }
        let idx = self.resolve_other_edit(idx);
        if self.rows[idx].is_editing() {
            return;
        }
        self.selected = idx;
        self.drag = Some(idx);
    }

    /// The drag cursor moved over `target`: apply adjacent
    /// transpositions one step at a time until the dragged row record
    /// (and its entry) arrives there, exactly as the live row element
    /// moves
    pub fn drag_over(&mut self, target: usize) {
        let Some(mut current) = self.drag else {
            return;
        };
        if target >= self.rows.len() {
            return;
        }
        while current < target {
            self.swap_adjacent(current, current + 1);
            current += 1;
        }
        while current > target {
            self.swap_adjacent(current, current - 1);
            current -= 1;
        }
        self.drag = Some(current);
        self.selected = current;
    }

    pub fn drag_end(&mut self) {
        self.drag = None;
    }

    /// Move the selected row one position up (same transposition a
    /// drag step applies)
    pub fn move_selected_up(&mut self) {
        if self.editing_row().is_some() {
            return;
        }
        if self.selected > 0 {
            let idx = self.selected;
            self.swap_adjacent(idx, idx - 1);
            self.selected = idx - 1;
        }
    }

    /// Move the selected row one position down
    pub fn move_selected_down(&mut self) {
        if self.editing_row().is_some() {
            return;
        }
        if self.selected + 1 < self.rows.len() {
            let idx = self.selected;
            self.swap_adjacent(idx, idx + 1);
            self.selected = idx + 1;
        }
    }

    fn swap_adjacent(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.rows.swap(a, b);
        self.dirty = true;
        self.status = None;
        trace!("rows {a} and {b} swapped");
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
