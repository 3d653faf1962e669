//! Toast notification widget
//!
//! Short-lived messages drawn over the bottom-right corner: the celebration
//! after an add, export results and the like.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::tui::palette::Palette;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Celebration,
    Warning,
}

impl NotificationKind {
    fn color(self, palette: &Palette) -> Color {
        match self {
            Self::Info => palette.accent,
            Self::Celebration => palette.positive,
            Self::Warning => palette.warning,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Info => " Info ",
            Self::Celebration => " 🎉 ",
            Self::Warning => " ! ",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn celebration(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Celebration)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Set how long the notification stays up
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    palette: Palette,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, palette: Palette) -> Self {
        Self {
            notification,
            palette,
        }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color(&self.palette);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.notification.kind.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(self.palette.base())
            .block(block)
            .render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop the front notification once it has expired
    pub fn remove_expired(&mut self) {
        if self.notifications.first().is_some_and(Notification::is_expired) {
            self.notifications.remove(0);
        }
    }

    /// The notification on screen, if any
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_shows_oldest_first() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::celebration("Expense added"));
        queue.push(Notification::warning("Budget limit exceeded!"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().kind, NotificationKind::Celebration);
    }

    #[test]
    fn test_expired_notification_is_removed() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("gone").with_duration(Duration::ZERO));
        queue.push(Notification::info("stays"));

        queue.remove_expired();
        assert_eq!(queue.current().unwrap().message, "stays");

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
    }
}
