//! Expense Tracker - personal expense tracking for the terminal
//!
//! This library provides the core of the `expenses` application: an ordered
//! list of expense records with a running total, a budget limit with an
//! over-budget warning, search and category filtering, CSV export and a
//! persisted light/dark theme.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, theme)
//! - `storage`: Key-value storage port and its JSON file backend
//! - `services`: Business logic layer (expense store, theme toggle, feedback)
//! - `audit`: Audit logging system
//! - `export`: CSV export
//! - `display`: Terminal formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal UI
//! - `logging`: Diagnostic log setup
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::models::ExpenseDraft;
//! use expense_tracker::services::ExpenseStore;
//! use expense_tracker::storage::MemoryStore;
//!
//! let mut store = ExpenseStore::load(MemoryStore::new()).unwrap();
//! store
//!     .add(&ExpenseDraft::new("Coffee", "3.50", "Food", "2025-07-01"))
//!     .unwrap();
//! assert_eq!(store.total().cents(), 350);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::TrackerError;
