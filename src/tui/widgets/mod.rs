//! Reusable TUI widgets

pub mod input;
pub mod notification;

pub use input::{InputField, TextInput};
pub use notification::{Notification, NotificationKind, NotificationQueue, NotificationWidget};
