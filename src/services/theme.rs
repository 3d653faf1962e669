//! Theme toggle
//!
//! Reads the saved theme (light when nothing is saved) and persists every
//! flip.

use crate::error::TrackerResult;
use crate::models::Theme;
use crate::storage::{self, KeyValueStore, StorageKey};

/// Current theme plus the logic to flip and persist it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeToggle {
    theme: Theme,
}

impl ThemeToggle {
    /// Read the saved theme
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> TrackerResult<Self> {
        let theme: Theme = storage::load(store, StorageKey::Theme)?;
        Ok(Self { theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Text shown on the toggle control
    pub fn indicator(&self) -> &'static str {
        self.theme.indicator()
    }

    /// Flip the theme and persist it; returns the new theme
    pub fn toggle<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> TrackerResult<Theme> {
        let next = self.theme.toggled();
        storage::save(store, StorageKey::Theme, &next)?;
        self.theme = next;
        Ok(next)
    }
}
