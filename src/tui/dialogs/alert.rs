//! Alert dialog
//!
//! Blocking message shown for validation failures; Enter or Esc dismisses it.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;
use crate::tui::palette::Palette;

/// Render an alert dialog
pub fn render(frame: &mut Frame, message: &str, palette: Palette) {
    let area = centered_rect_fixed(50, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Alert ")
        .title_style(
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.warning));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(palette.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(palette.accent)),
            Span::raw(" OK"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(palette.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
