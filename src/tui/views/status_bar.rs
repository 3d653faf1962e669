//! Status bar view
//!
//! Shows the running total, the budget limit and warning, and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();
    let symbol = &app.settings.currency_symbol;
    let over_budget = app.store.check_budget();

    let total_style = if over_budget {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.positive)
            .add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::styled(" Total: ", Style::default().fg(palette.text)),
        Span::styled(app.store.total().format_with_symbol(symbol), total_style),
    ];

    let limit = app.store.budget_limit();
    spans.push(Span::raw(" │ "));
    if limit.is_positive() {
        spans.push(Span::styled("Budget: ", Style::default().fg(palette.text)));
        spans.push(Span::styled(
            limit.format_with_symbol(symbol),
            Style::default().fg(palette.accent),
        ));
    } else {
        spans.push(Span::styled(
            "No budget limit",
            Style::default().fg(palette.muted),
        ));
    }

    if over_budget {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "⚠ Budget limit exceeded!",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let hints = match app.focus {
        Focus::List => {
            " ↑↓ select  e edit  d delete  a add  / search  f filter  x export  b budget  t theme  q quit"
        }
        Focus::Search => " type to search  Enter/Esc back to list  Tab next",
        _ => " Enter submit  Tab next field  Esc list",
    };

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(hints, Style::default().fg(palette.muted))),
    ];

    frame.render_widget(Paragraph::new(lines).style(palette.base()), area);
}
