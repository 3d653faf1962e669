//! Budget limit dialog
//!
//! Single input for the limit. An empty input clears the limit.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::InputField;

/// Render the budget dialog
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    let palette = app.palette();
    let area = centered_rect_fixed(44, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget Limit ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(InputField::new(&app.budget_input, true, palette), chunks[1]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(palette.accent)),
        Span::raw(" Set  "),
        Span::styled("[Esc]", Style::default().fg(palette.accent)),
        Span::raw(" Cancel  (empty = no limit)"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}
