//! Core data models for the expense tracker
//!
//! Expenses, the form draft they are built from, money amounts and the
//! theme preference.

pub mod expense;
pub mod money;
pub mod theme;

pub use expense::{Expense, ExpenseDraft, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
pub use theme::Theme;
