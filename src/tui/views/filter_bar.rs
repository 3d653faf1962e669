//! Search box and category filter

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};
use crate::tui::layout::filter_bar_split;
use crate::tui::widgets::InputField;

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();
    let (search_area, category_area) = filter_bar_split(area);

    let search_focused = app.focus == Focus::Search;
    let search_block = Block::default()
        .title(" / Search ")
        .borders(Borders::ALL)
        .border_style(palette.border_style(search_focused));
    let inner = search_block.inner(search_area);
    frame.render_widget(search_block, search_area);

    frame.render_widget(InputField::new(&app.search, search_focused, palette), inner);

    let category = app.category_filter.as_deref().unwrap_or("All");
    let category_block = Block::default()
        .title(" f Category ")
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));
    let paragraph = Paragraph::new(Line::from(Span::styled(
        category,
        Style::default().fg(palette.text),
    )))
    .block(category_block);
    frame.render_widget(paragraph, category_area);
}
