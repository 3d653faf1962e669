use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{
    handle_add, handle_budget_command, handle_delete, handle_edit, handle_export_command,
    handle_history_command, handle_list, handle_theme_command, AddArgs, BudgetCommands,
    DeleteArgs, EditArgs, ListArgs, ThemeCommands,
};
use expense_tracker::config::{paths::DIR_ENV_VAR, Settings, TrackerPaths};
use expense_tracker::logging;
use expense_tracker::services::{BellFeedback, ExpenseStore, RecordedFeedback};
use expense_tracker::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track expenses against a budget from the terminal",
    long_about = "Expense Tracker keeps a list of expenses with a running total, \
                  warns when the total passes your budget limit, and exports \
                  the list as CSV. Run 'expenses tui' for the interactive view."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Add an expense
    Add(AddArgs),

    /// List expenses with the running total
    #[command(alias = "ls")]
    List(ListArgs),

    /// Take an expense out of the list and add it back with changes
    Edit(EditArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Export all expenses as CSV
    Export {
        /// Output file (defaults to the configured export file name)
        output: Option<PathBuf>,
    },

    /// Budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Theme commands
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if matches!(cli.command, Some(Commands::Tui)) {
        logging::init_file_logging(&paths, &settings)?;
    } else {
        logging::init_cli_logging(&settings);
    }

    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        Some(Commands::Tui) => {
            let storage = JsonFileStore::open(&paths)?;
            let store = ExpenseStore::load_with_feedback(
                storage,
                RecordedFeedback::new(settings.feedback_enabled),
            )?
            .with_audit(audit);
            expense_tracker::tui::run_tui(store, &settings)?;
        }
        Some(Commands::Add(args)) => {
            let mut store = open_store(&paths, &settings, audit)?;
            handle_add(&mut store, &settings, args)?;
        }
        Some(Commands::List(args)) => {
            let store = open_store(&paths, &settings, audit)?;
            handle_list(&store, &settings, args)?;
        }
        Some(Commands::Edit(args)) => {
            let mut store = open_store(&paths, &settings, audit)?;
            handle_edit(&mut store, &settings, args)?;
        }
        Some(Commands::Delete(args)) => {
            let mut store = open_store(&paths, &settings, audit)?;
            handle_delete(&mut store, &settings, args)?;
        }
        Some(Commands::Export { output }) => {
            let store = open_store(&paths, &settings, audit)?;
            handle_export_command(&store, &settings, output)?;
        }
        Some(Commands::Budget(cmd)) => {
            let mut store = open_store(&paths, &settings, audit)?;
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Theme(cmd)) => {
            let mut storage = JsonFileStore::open(&paths)?;
            handle_theme_command(&mut storage, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&audit, limit)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!("Debug log:       {}", paths.debug_log().display());
            println!();
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Export file:     {}", settings.export_file_name);
            println!("Feedback:        {}", if settings.feedback_enabled { "on" } else { "off" });
            println!("Log level:       {}", settings.log_level);
            println!();
            println!("Set {} to use a different base directory.", DIR_ENV_VAR);
        }
        None => {
            println!("Expense Tracker - track expenses against a budget");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

fn open_store(
    paths: &TrackerPaths,
    settings: &Settings,
    audit: AuditLogger,
) -> Result<ExpenseStore<JsonFileStore, BellFeedback>> {
    let storage = JsonFileStore::open(paths)?;
    let store =
        ExpenseStore::load_with_feedback(storage, BellFeedback::new(settings.feedback_enabled))?
            .with_audit(audit);
    Ok(store)
}
