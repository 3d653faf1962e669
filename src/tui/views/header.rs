//! Title line with the theme toggle indicator

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();

    let title = Paragraph::new(Line::from(Span::styled(
        " Expense Tracker",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("[t] ", Style::default().fg(palette.muted)),
        Span::raw(app.theme.indicator()),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, area);
}
