//! Theme CLI commands

use clap::Subcommand;

use crate::error::TrackerResult;
use crate::services::ThemeToggle;
use crate::storage::KeyValueStore;

/// Theme subcommands
#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Switch between light and dark
    Toggle,

    /// Show the current theme
    Show,
}

/// Handle a theme command
pub fn handle_theme_command<S: KeyValueStore + ?Sized>(
    store: &mut S,
    cmd: ThemeCommands,
) -> TrackerResult<()> {
    let mut toggle = ThemeToggle::load(store)?;

    match cmd {
        ThemeCommands::Toggle => {
            let theme = toggle.toggle(store)?;
            println!("Theme: {} {}", theme, toggle.indicator());
        }
        ThemeCommands::Show => {
            println!("Theme: {} {}", toggle.theme(), toggle.indicator());
        }
    }

    Ok(())
}
