//! Terminal User Interface module
//!
//! An interactive view of the expense list using ratatui: an entry form,
//! a search box and category filter, the list with per-row edit and delete,
//! the running total with the budget warning, export, a budget dialog and
//! the light/dark theme toggle.

pub mod app;
pub mod event;
pub mod handler;
pub mod palette;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
