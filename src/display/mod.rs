//! Display formatting for terminal output
//!
//! Provides utilities for formatting the expense list for the CLI.

pub mod expense;

pub use expense::{format_expense_table, format_expense_view, format_summary};
