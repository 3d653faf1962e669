//! Export module for the expense tracker
//!
//! CSV export of the full expense list.

pub mod csv;

pub use self::csv::export_expenses_csv;

/// Default file name for CSV exports
pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";
