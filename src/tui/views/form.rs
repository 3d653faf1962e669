//! Expense entry form
//!
//! Four inputs, one per line, inside a bordered block. Enter submits from
//! any field.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};
use crate::tui::widgets::InputField;

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();
    let focused = app.focus.is_form_field();

    let block = Block::default()
        .title(" Add Expense (Enter to submit) ")
        .borders(Borders::ALL)
        .border_style(palette.border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);

    let fields = [
        (&app.form.name, Focus::Name),
        (&app.form.amount, Focus::Amount),
        (&app.form.category, Focus::Category),
        (&app.form.date, Focus::Date),
    ];

    for ((input, focus), row) in fields.into_iter().zip(rows.iter()) {
        frame.render_widget(InputField::new(input, app.focus == focus, palette), *row);
    }
}
