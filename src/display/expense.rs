//! Expense display formatting
//!
//! Formats the expense view for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::DATE_FORMAT;
use crate::services::ExpenseView;

#[derive(Tabled)]
struct ExpenseTableRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the visible rows as a table; positions are 1-based
pub fn format_expense_table(view: &ExpenseView<'_>, currency_symbol: &str) -> String {
    if view.rows.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = view.rows.iter().map(|row| ExpenseTableRow {
        position: row.index + 1,
        name: row.expense.name.clone(),
        category: row.expense.category.clone(),
        date: row.expense.date.format(DATE_FORMAT).to_string(),
        amount: row.expense.amount.format_with_symbol(currency_symbol),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()))
        .to_string()
}

/// Format the running total, the limit and the warning line
pub fn format_summary(view: &ExpenseView<'_>, currency_symbol: &str) -> String {
    let mut output = format!("Total: {}", view.total.format_with_symbol(currency_symbol));

    if view.budget_limit.is_positive() {
        output.push_str(&format!(
            "  (budget {})",
            view.budget_limit.format_with_symbol(currency_symbol)
        ));
    }

    if view.budget_warning {
        output.push_str("\n⚠ Budget limit exceeded!");
    }

    output
}

/// Format a whole view: table followed by the summary
pub fn format_expense_view(view: &ExpenseView<'_>, currency_symbol: &str) -> String {
    format!(
        "{}\n{}",
        format_expense_table(view, currency_symbol),
        format_summary(view, currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money};
    use crate::services::ExpenseStore;
    use crate::storage::MemoryStore;

    fn store() -> ExpenseStore<MemoryStore> {
        let mut store = ExpenseStore::load(MemoryStore::new()).unwrap();
        store
            .add(&ExpenseDraft::new("Coffee", "4.5", "Food", "2025-05-01"))
            .unwrap();
        store
            .add(&ExpenseDraft::new("Train", "23", "Transport", "2025-05-02"))
            .unwrap();
        store
    }

    #[test]
    fn test_table_shows_one_based_positions() {
        let store = store();
        let view = store.render_rows(store.search("train"));
        let table = format_expense_table(&view, "$");

        assert!(table.contains("Train"));
        assert!(table.contains("$23.00"));
        assert!(table.contains(" 2 "));
        assert!(!table.contains("Coffee"));
    }

    #[test]
    fn test_empty_view() {
        let store = store();
        let view = store.render_rows(Vec::new());
        assert_eq!(format_expense_table(&view, "$"), "No expenses found.");
    }

    #[test]
    fn test_summary_with_warning() {
        let mut store = store();
        store.set_budget(Money::from_cents(2000)).unwrap();
        let summary = format_summary(&store.render(), "€");

        assert!(summary.starts_with("Total: €27.50"));
        assert!(summary.contains("budget €20.00"));
        assert!(summary.contains("Budget limit exceeded"));
    }

    #[test]
    fn test_summary_without_limit() {
        let store = store();
        assert_eq!(format_summary(&store.render(), "$"), "Total: $27.50");
    }
}
