//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod history;
pub mod theme;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{
    handle_add, handle_delete, handle_edit, handle_list, AddArgs, DeleteArgs, EditArgs, ListArgs,
};
pub use export::handle_export_command;
pub use history::handle_history_command;
pub use theme::{handle_theme_command, ThemeCommands};
