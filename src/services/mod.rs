//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage port:
//! validation, the running total, budget checks and the theme toggle.

pub mod expense;
pub mod feedback;
pub mod theme;

pub use expense::{ExpenseFilter, ExpenseRow, ExpenseStore, ExpenseView};
pub use feedback::{BellFeedback, Cue, Feedback, NoFeedback, RecordedFeedback};
pub use theme::ThemeToggle;
