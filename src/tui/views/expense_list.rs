//! Expense list view
//!
//! Shows the rows matching the search box and category filter. The `#`
//! column is the position in the full list, so it stays stable while
//! filtering.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::DATE_FORMAT;
use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();
    let rows = app.visible_rows();

    let title = if app.store.is_empty() || rows.len() == app.store.len() {
        format!(" Expenses ({}) ", rows.len())
    } else {
        format!(" Expenses ({} of {}) ", rows.len(), app.store.len())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(palette.border_style(app.focus == Focus::List));

    if rows.is_empty() {
        let text = if app.store.is_empty() {
            "No expenses yet. Fill in the form above and press Enter."
        } else {
            "No expenses match the current search and filter."
        };
        let paragraph = Paragraph::new(Line::from(text))
            .style(Style::default().fg(palette.muted))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let widths = [
        Constraint::Length(4),  // Position
        Constraint::Min(16),    // Name
        Constraint::Length(14), // Category
        Constraint::Length(12), // Date
        Constraint::Length(12), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from("Name").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Date").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(palette.accent))
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from((row.index + 1).to_string()),
                Cell::from(truncate_string(&row.expense.name, 30)),
                Cell::from(truncate_string(&row.expense.category, 14)),
                Cell::from(row.expense.date.format(DATE_FORMAT).to_string()),
                Cell::from(Line::from(row.expense.amount.format_with_symbol(symbol)).right_aligned()),
            ])
        })
        .collect();

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(block)
        .style(palette.base())
        .highlight_style(Style::default().bg(palette.selected_bg).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if app.focus == Focus::List {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to at most `max_len` characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
