//! Expense CLI commands
//!
//! Add, list, edit and delete. Positions on the command line are 1-based,
//! matching the `#` column printed by `list`.

use chrono::Local;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_view, format_summary};
use crate::error::TrackerResult;
use crate::models::{Expense, ExpenseDraft, DATE_FORMAT};
use crate::services::{ExpenseFilter, ExpenseStore, Feedback};
use crate::storage::KeyValueStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub name: String,
    /// Amount (e.g. "12.50")
    pub amount: String,
    /// Category
    #[arg(short, long)]
    pub category: String,
    /// Date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show expenses whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only show expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Position of the expense, as shown by `list`
    #[arg(value_parser = parse_position)]
    pub position: usize,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New amount
    #[arg(long)]
    pub amount: Option<String>,
    /// New category
    #[arg(long)]
    pub category: Option<String>,
    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Position of the expense, as shown by `list`
    #[arg(value_parser = parse_position)]
    pub position: usize,
}

/// Parse a 1-based position
pub fn parse_position(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("'{}' is not a position (1, 2, 3, ...)", s)),
        Ok(n) => Ok(n),
    }
}

/// Handle `add`
pub fn handle_add<S: KeyValueStore, F: Feedback>(
    store: &mut ExpenseStore<S, F>,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<()> {
    let date = args
        .date
        .unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
    let draft = ExpenseDraft::new(args.name, args.amount, args.category, date);

    let added = store.add(&draft)?;
    println!(
        "Added: {}",
        format_added(added, &settings.currency_symbol)
    );
    let summary = format_summary(&store.render(), &settings.currency_symbol);
    println!("{}", summary);

    Ok(())
}

/// Handle `list`
pub fn handle_list<S: KeyValueStore, F: Feedback>(
    store: &ExpenseStore<S, F>,
    settings: &Settings,
    args: ListArgs,
) -> TrackerResult<()> {
    let mut filter = ExpenseFilter::new();
    if let Some(term) = args.search {
        filter = filter.search(term);
    }
    if let Some(category) = args.category {
        filter = filter.category(category);
    }

    let view = store.render_rows(store.list(&filter));
    println!("{}", format_expense_view(&view, &settings.currency_symbol));

    Ok(())
}

/// Handle `edit`: take the expense out, apply the changes and resubmit it
///
/// The edited expense moves to the end of the list. If the changed fields
/// don't validate, nothing is saved.
pub fn handle_edit<S: KeyValueStore, F: Feedback>(
    store: &mut ExpenseStore<S, F>,
    settings: &Settings,
    args: EditArgs,
) -> TrackerResult<()> {
    let index = args.position - 1;
    let Some(current) = store.get(index) else {
        println!("No expense at position {}.", args.position);
        return Ok(());
    };
    let mut draft = ExpenseDraft::from(current);

    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(amount) = args.amount {
        draft.amount = amount;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(date) = args.date {
        draft.date = date;
    }

    store.check_replacement(index, &draft)?;
    store.edit(index)?;
    let updated = store.add(&draft)?;
    println!(
        "Updated: {}",
        format_added(updated, &settings.currency_symbol)
    );

    Ok(())
}

/// Handle `delete`
pub fn handle_delete<S: KeyValueStore, F: Feedback>(
    store: &mut ExpenseStore<S, F>,
    settings: &Settings,
    args: DeleteArgs,
) -> TrackerResult<()> {
    match store.delete(args.position - 1)? {
        Some(removed) => {
            println!(
                "Deleted: {}",
                format_added(&removed, &settings.currency_symbol)
            );
            let summary = format_summary(&store.render(), &settings.currency_symbol);
            println!("{}", summary);
        }
        None => println!("No expense at position {}.", args.position),
    }

    Ok(())
}

fn format_added(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{} ({}) - {} {}",
        expense.name,
        expense.category,
        expense.date.format(DATE_FORMAT),
        expense.amount.format_with_symbol(currency_symbol)
    )
}
