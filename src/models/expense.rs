//! Expense model
//!
//! An expense has no stable id; its identity is its position in the list.
//! `ExpenseDraft` holds the raw text of the entry form and is what gets
//! validated on submit and handed back on edit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Format used for expense dates in storage, the form and the CSV export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Short label used in the audit log and notifications
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} {}",
            self.name,
            self.category,
            self.date.format(DATE_FORMAT),
            self.amount
        )
    }
}

/// Raw contents of the expense entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Turn the form contents into an expense
    ///
    /// Empty name, category or date, or an amount that is not a number, all
    /// produce the same "fill in all fields" alert. Negative amounts and
    /// malformed dates get their own messages.
    pub fn validate(&self) -> TrackerResult<Expense> {
        if self.name.is_empty() || self.category.is_empty() || self.date.trim().is_empty() {
            return Err(TrackerError::missing_fields());
        }

        let amount = Money::parse(&self.amount).map_err(|_| TrackerError::missing_fields())?;
        if amount.is_negative() {
            return Err(TrackerError::Validation(
                "Amount cannot be negative.".into(),
            ));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            TrackerError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD.",
                self.date.trim()
            ))
        })?;

        Ok(Expense::new(
            self.name.clone(),
            amount,
            self.category.clone(),
            date,
        ))
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: expense.amount.to_decimal_string(),
            category: expense.category.clone(),
            date: expense.date.format(DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> Expense {
        Expense::new(
            "Coffee",
            Money::from_cents(450),
            "Food",
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        )
    }

    #[test]
    fn test_validate_complete_draft() {
        let draft = ExpenseDraft::new("Coffee", "4.50", "Food", "2025-03-14");
        assert_eq!(draft.validate().unwrap(), coffee());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let drafts = [
            ExpenseDraft::new("", "4.50", "Food", "2025-03-14"),
            ExpenseDraft::new("Coffee", "abc", "Food", "2025-03-14"),
            ExpenseDraft::new("Coffee", "", "Food", "2025-03-14"),
            ExpenseDraft::new("Coffee", "4.50", "", "2025-03-14"),
            ExpenseDraft::new("Coffee", "4.50", "Food", ""),
        ];

        for draft in drafts {
            let err = draft.validate().unwrap_err();
            assert_eq!(err.to_string(), "Please fill in all fields.");
        }
    }

    #[test]
    fn test_validate_rejects_negative_and_bad_date() {
        let negative = ExpenseDraft::new("Refund", "-3", "Food", "2025-03-14");
        assert!(negative.validate().unwrap_err().is_validation());

        let bad_date = ExpenseDraft::new("Coffee", "4.50", "Food", "14/03/2025");
        assert!(bad_date
            .validate()
            .unwrap_err()
            .to_string()
            .contains("Invalid date"));
    }

    #[test]
    fn test_draft_from_expense_round_trips() {
        let expense = coffee();
        let draft = ExpenseDraft::from(&expense);
        assert_eq!(draft.amount, "4.50");
        assert_eq!(draft.date, "2025-03-14");
        assert_eq!(draft.validate().unwrap(), expense);
    }

    #[test]
    fn test_name_contains_ignores_case() {
        let expense = coffee();
        assert!(expense.name_contains("COF"));
        assert!(expense.name_contains(""));
        assert!(!expense.name_contains("tea"));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(coffee()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Coffee",
                "amount": 450,
                "category": "Food",
                "date": "2025-03-14"
            })
        );
    }
}
