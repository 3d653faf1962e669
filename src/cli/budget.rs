//! Budget CLI commands
//!
//! Set and show the budget limit.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::services::{ExpenseStore, Feedback};
use crate::storage::KeyValueStore;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget limit (0 turns the warning off)
    Set {
        /// Limit (e.g. "500" or "500.00")
        limit: String,
    },

    /// Show the limit, the running total and whether the limit is exceeded
    Show,
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore, F: Feedback>(
    store: &mut ExpenseStore<S, F>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set { limit } => {
            let limit = Money::parse(&limit).map_err(|_| {
                TrackerError::Validation(format!(
                    "Invalid budget limit '{}'. Use a number like '500' or '500.00'.",
                    limit
                ))
            })?;

            store.set_budget(limit)?;
            println!(
                "Budget limit set to {}",
                limit.format_with_symbol(&settings.currency_symbol)
            );
            let summary = format_summary(&store.render(), &settings.currency_symbol);
            println!("{}", summary);
        }
        BudgetCommands::Show => {
            let limit = store.budget_limit();
            if limit.is_zero() {
                println!("No budget limit set.");
            } else {
                println!(
                    "Budget limit: {}",
                    limit.format_with_symbol(&settings.currency_symbol)
                );
            }
            let summary = format_summary(&store.render(), &settings.currency_symbol);
            println!("{}", summary);
        }
    }

    Ok(())
}
