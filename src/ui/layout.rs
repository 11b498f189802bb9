// Screen layout and mouse hit-testing
// The event handler maps mouse coordinates back onto rows and icons
// through the same geometry the renderer draws with

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the icon cell at the right edge of the table
pub const ICON_COL_WIDTH: u16 = 7;

/// Rows of the table block consumed by border and header
const TABLE_HEADER_HEIGHT: u16 = 2;

/// What a mouse coordinate landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The edit/commit icon of a row
    EditIcon(usize),

    /// The delete/cancel icon of a row
    DeleteIcon(usize),

    /// A row's text cell
    Row(usize),

    /// Inside the table but not on a row
    Table,

    /// Anywhere else on screen
    Outside,
}

/// Areas of the two screen regions
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub table: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(area);

        Self {
            table: chunks[0],
            status: chunks[1],
        }
    }

    /// Resolve a mouse coordinate against the table geometry
    pub fn hit(&self, x: u16, y: u16, row_count: usize) -> Hit {
        let t = self.table;
        if x < t.x || x >= t.x + t.width || y < t.y || y >= t.y + t.height {
            return Hit::Outside;
        }

        let data_top = t.y + TABLE_HEADER_HEIGHT;
        if y < data_top || y + 1 >= t.y + t.height {
            return Hit::Table;
        }
        let idx = (y - data_top) as usize;
        if idx >= row_count {
            return Hit::Table;
        }

        // Icon cell sits against the right border, edit icon first
        let icon_left = (t.x + t.width).saturating_sub(1 + ICON_COL_WIDTH);
        if x >= icon_left && x + 1 < t.x + t.width {
            if x < icon_left + ICON_COL_WIDTH / 2 {
                return Hit::EditIcon(idx);
            }
            return Hit::DeleteIcon(idx);
        }

        Hit::Row(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> AppLayout {
        AppLayout::compute(Rect::new(0, 0, 40, 12))
    }

    #[test]
    fn test_split_reserves_status_rows() {
        let layout = layout();
        assert_eq!(layout.table.height, 10);
        assert_eq!(layout.status.y, 10);
        assert_eq!(layout.status.height, 2);
    }

    #[test]
    fn test_hit_first_row_text() {
        let layout = layout();
        assert_eq!(layout.hit(2, 2, 3), Hit::Row(0));
        assert_eq!(layout.hit(2, 4, 3), Hit::Row(2));
    }

    #[test]
    fn test_hit_below_rows_is_table() {
        let layout = layout();
        assert_eq!(layout.hit(2, 6, 3), Hit::Table);
        // header and top border are not rows
        assert_eq!(layout.hit(2, 0, 3), Hit::Table);
        assert_eq!(layout.hit(2, 1, 3), Hit::Table);
    }

    #[test]
    fn test_hit_icon_cells() {
        let layout = layout();
        // icon cell spans the 7 columns before the right border
        assert_eq!(layout.hit(32, 2, 3), Hit::EditIcon(0));
        assert_eq!(layout.hit(38, 2, 3), Hit::DeleteIcon(0));
    }

    #[test]
    fn test_hit_outside_table() {
        let layout = layout();
        assert_eq!(layout.hit(2, 11, 3), Hit::Outside);
    }
}
