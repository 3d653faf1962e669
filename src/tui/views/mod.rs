//! TUI Views module
//!
//! The header, entry form, search and filter bar, expense list and status
//! bar, plus the dialog and notification overlays.

pub mod expense_list;
pub mod filter_bar;
pub mod form;
pub mod header;
pub mod status_bar;

use ratatui::{layout::Rect, widgets::Block, Frame};

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    let palette = app.palette();
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    form::render(frame, app, layout.form);
    filter_bar::render(frame, app, layout.filter_bar);
    expense_list::render(frame, app, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = notification_area(frame.area());
        frame.render_widget(NotificationWidget::new(notification, palette), area);
    }

    match &app.active_dialog {
        ActiveDialog::Alert(message) => dialogs::alert::render(frame, message, palette),
        ActiveDialog::Budget => dialogs::budget::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Bottom-right corner above the status bar
fn notification_area(area: Rect) -> Rect {
    let width = 36.min(area.width);
    let height = 3.min(area.height);
    Rect::new(
        area.x + area.width - width,
        area.y + area.height.saturating_sub(height + 2),
        width,
        height,
    )
}
