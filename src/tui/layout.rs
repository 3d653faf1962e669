//! Layout definitions for the TUI
//!
//! Header with the theme toggle, the entry form, the search and filter bar,
//! the expense list and the status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and theme indicator
    pub header: Rect,
    /// Name/amount/category/date form
    pub form: Rect,
    /// Search box and category filter
    pub filter_bar: Rect,
    /// Expense list
    pub list: Rect,
    /// Total, budget and key hints
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(6), // Form
                Constraint::Length(3), // Search and filter
                Constraint::Min(3),    // List
                Constraint::Length(2), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            form: chunks[1],
            filter_bar: chunks[2],
            list: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Split the filter bar into the search box and the category filter
pub fn filter_bar_split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = AppLayout::new(area);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.form.height, 6);
        assert_eq!(layout.status_bar.y + layout.status_bar.height, 30);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let rect = centered_rect_fixed(100, 10, Rect::new(0, 0, 40, 20));
        assert_eq!(rect.width, 40);
        assert_eq!(rect.y, 5);
    }
}
