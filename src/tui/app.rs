//! Application state for the TUI
//!
//! The App struct owns the expense store and holds everything needed for
//! rendering and handling events.

use std::fs::File;
use std::io::BufWriter;

use chrono::Local;
use tracing::debug;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseDraft, Money, DATE_FORMAT};
use crate::services::{ExpenseFilter, ExpenseRow, ExpenseStore, RecordedFeedback, ThemeToggle};
use crate::storage::KeyValueStore;

use super::palette::Palette;
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Amount,
    Category,
    Date,
    Search,
    List,
}

impl Focus {
    /// Next control (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Search,
            Self::Search => Self::List,
            Self::List => Self::Name,
        }
    }

    /// Previous control (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::List,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
            Self::Search => Self::Date,
            Self::List => Self::Search,
        }
    }

    /// Whether the control is one of the four form fields
    pub fn is_form_field(self) -> bool {
        matches!(self, Self::Name | Self::Amount | Self::Category | Self::Date)
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Blocking message; any key dismisses it
    Alert(String),
    /// Budget limit input
    Budget,
}

/// The four inputs of the expense form
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    pub name: TextInput,
    pub amount: TextInput,
    pub category: TextInput,
    pub date: TextInput,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseForm {
    pub fn new() -> Self {
        let mut form = Self {
            name: TextInput::new().label("Name").placeholder("What was it?"),
            amount: TextInput::new().label("Amount").placeholder("0.00"),
            category: TextInput::new().label("Category").placeholder("e.g. Food"),
            date: TextInput::new().label("Date").placeholder("YYYY-MM-DD"),
        };
        form.reset_date();
        form
    }

    /// The form contents as submitted
    pub fn draft(&self) -> ExpenseDraft {
        ExpenseDraft::new(
            self.name.value(),
            self.amount.value(),
            self.category.value(),
            self.date.value(),
        )
    }

    /// Load a draft into the inputs
    pub fn fill(&mut self, draft: &ExpenseDraft) {
        self.name.set_value(draft.name.as_str());
        self.amount.set_value(draft.amount.as_str());
        self.category.set_value(draft.category.as_str());
        self.date.set_value(draft.date.as_str());
    }

    /// Empty the inputs; the date goes back to today
    pub fn clear(&mut self) {
        self.name.clear();
        self.amount.clear();
        self.category.clear();
        self.reset_date();
    }

    /// Input for a form field focus
    pub fn input_mut(&mut self, focus: Focus) -> Option<&mut TextInput> {
        match focus {
            Focus::Name => Some(&mut self.name),
            Focus::Amount => Some(&mut self.amount),
            Focus::Category => Some(&mut self.category),
            Focus::Date => Some(&mut self.date),
            Focus::Search | Focus::List => None,
        }
    }

    fn reset_date(&mut self) {
        self.date
            .set_value(Local::now().date_naive().format(DATE_FORMAT).to_string());
    }
}

/// Main application state
pub struct App<'a, S: KeyValueStore> {
    /// The expense store
    pub store: ExpenseStore<S, RecordedFeedback>,

    /// Application settings
    pub settings: &'a Settings,

    /// Light/dark theme
    pub theme: ThemeToggle,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused control
    pub focus: Focus,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Entry form
    pub form: ExpenseForm,

    /// Search box
    pub search: TextInput,

    /// Category filter; `None` shows every category
    pub category_filter: Option<String>,

    /// Selected position within the visible rows
    pub selected: usize,

    /// Budget dialog input
    pub budget_input: TextInput,

    /// Toasts waiting to be shown
    pub notifications: NotificationQueue,

    /// Terminal bells requested since the last draw
    pending_bells: usize,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    /// Create a new App instance
    pub fn new(
        store: ExpenseStore<S, RecordedFeedback>,
        settings: &'a Settings,
    ) -> TrackerResult<Self> {
        let theme = ThemeToggle::load(store.storage())?;

        Ok(Self {
            store,
            settings,
            theme,
            should_quit: false,
            focus: Focus::default(),
            active_dialog: ActiveDialog::default(),
            form: ExpenseForm::new(),
            search: TextInput::new().placeholder("name contains..."),
            category_filter: None,
            selected: 0,
            budget_input: TextInput::new().label("Limit").placeholder("0.00"),
            notifications: NotificationQueue::new(),
            pending_bells: 0,
        })
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme.theme())
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Show a blocking alert
    pub fn alert(&mut self, message: impl Into<String>) {
        self.active_dialog = ActiveDialog::Alert(message.into());
    }

    /// Filter built from the search box and the category filter
    pub fn filter(&self) -> ExpenseFilter {
        let mut filter = ExpenseFilter::new().search(self.search.value());
        if let Some(category) = &self.category_filter {
            filter = filter.category(category.as_str());
        }
        filter
    }

    /// Rows currently on screen
    pub fn visible_rows(&self) -> Vec<ExpenseRow<'_>> {
        self.store.list(&self.filter())
    }

    /// Full-list index of the selected row
    pub fn selected_index(&self) -> Option<usize> {
        self.visible_rows().get(self.selected).map(|row| row.index)
    }

    /// Move focus forward and play the hover cue
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    /// Move focus backward and play the hover cue
    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.store.hover();
            self.drain_feedback();
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.visible_rows().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Submit the form: add the expense, or alert on invalid input
    pub fn submit_form(&mut self) -> TrackerResult<()> {
        let draft = self.form.draft();

        match self.store.add(&draft).map(|_| ()) {
            Ok(()) => {
                self.form.clear();
                self.set_focus(Focus::Name);
                if self.store.check_budget() {
                    self.notifications
                        .push(Notification::warning("Budget limit exceeded!"));
                }
            }
            Err(e) if e.is_validation() => self.alert(e.to_string()),
            Err(e) => return Err(e),
        }

        self.drain_feedback();
        Ok(())
    }

    /// Move the selected expense into the form for editing
    pub fn edit_selected(&mut self) -> TrackerResult<()> {
        let Some(index) = self.selected_index() else {
            return Ok(());
        };

        if let Some(draft) = self.store.edit(index)? {
            self.form.fill(&draft);
            self.clamp_selection();
            self.set_focus(Focus::Name);
        }
        Ok(())
    }

    /// Delete the selected expense
    pub fn delete_selected(&mut self) -> TrackerResult<()> {
        let Some(index) = self.selected_index() else {
            return Ok(());
        };

        self.store.delete(index)?;
        self.clamp_selection();
        self.drain_feedback();
        Ok(())
    }

    /// Step the category filter through "All" and each category in turn
    pub fn cycle_category_filter(&mut self) {
        let categories = self.store.categories();

        let next = match &self.category_filter {
            None => categories.first().map(|c| c.to_string()),
            Some(current) => categories
                .iter()
                .position(|c| *c == current.as_str())
                .and_then(|i| categories.get(i + 1))
                .map(|c| c.to_string()),
        };

        self.category_filter = next;
        self.selected = 0;
    }

    /// Called whenever the search text changes
    pub fn search_changed(&mut self) {
        self.selected = 0;
    }

    /// Write the full list to the configured export file
    pub fn export(&mut self) {
        let path = self.settings.export_file_name.clone();

        let result = File::create(&path)
            .map_err(|e| TrackerError::Export(format!("Failed to create file {}: {}", path, e)))
            .and_then(|file| self.store.export_csv(BufWriter::new(file)));

        match result {
            Ok(()) => self.notifications.push(Notification::info(format!(
                "Exported {} expenses to {}",
                self.store.len(),
                path
            ))),
            Err(e) => self.alert(e.to_string()),
        }
    }

    /// Open the budget dialog with the current limit filled in
    pub fn open_budget_dialog(&mut self) {
        let limit = self.store.budget_limit();
        if limit.is_zero() {
            self.budget_input.clear();
        } else {
            self.budget_input.set_value(limit.to_decimal_string());
        }
        self.active_dialog = ActiveDialog::Budget;
    }

    /// Apply the budget dialog input
    pub fn submit_budget(&mut self) -> TrackerResult<()> {
        let input = self.budget_input.value().trim().to_string();
        let limit = if input.is_empty() {
            Money::zero()
        } else {
            match Money::parse(&input) {
                Ok(limit) => limit,
                Err(_) => {
                    self.alert(format!("Invalid budget limit '{}'.", input));
                    return Ok(());
                }
            }
        };

        match self.store.set_budget(limit) {
            Ok(warning) => {
                self.close_dialog();
                if warning {
                    self.notifications
                        .push(Notification::warning("Budget limit exceeded!"));
                }
                Ok(())
            }
            Err(e) if e.is_validation() => {
                self.alert(e.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Flip the theme and persist it
    pub fn toggle_theme(&mut self) -> TrackerResult<()> {
        let theme = self.theme.toggle(self.store.storage_mut())?;
        debug!(%theme, "theme toggled");
        Ok(())
    }

    /// Drop expired notifications
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Take the number of bells to ring
    pub fn take_bells(&mut self) -> usize {
        std::mem::take(&mut self.pending_bells)
    }

    /// Turn recorded feedback into bells and celebration toasts
    fn drain_feedback(&mut self) {
        let (cues, celebrations) = self.store.feedback_mut().drain();

        self.pending_bells += cues.len();

        for _ in 0..celebrations {
            self.notifications
                .push(Notification::celebration("Expense added!"));
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use crate::storage::MemoryStore;

    fn app(settings: &Settings) -> App<'_, MemoryStore> {
        let store =
            ExpenseStore::load_with_feedback(MemoryStore::new(), RecordedFeedback::new(true))
                .unwrap();
        App::new(store, settings).unwrap()
    }

    fn fill(app: &mut App<'_, MemoryStore>, name: &str, amount: &str, category: &str) {
        app.form.fill(&ExpenseDraft::new(name, amount, category, "2025-07-01"));
    }

    #[test]
    fn test_focus_cycles_through_every_control() {
        let mut focus = Focus::Name;
        for _ in 0..6 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Name);
        assert_eq!(Focus::Name.prev(), Focus::List);
    }

    #[test]
    fn test_submit_adds_and_clears_form() {
        let settings = Settings::default();
        let mut app = app(&settings);
        fill(&mut app, "Lunch", "12.50", "Food");

        app.submit_form().unwrap();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.form.name.value(), "");
        assert!(!app.form.date.value().is_empty());
        assert_eq!(app.notifications.current().unwrap().message, "Expense added!");
        assert_eq!(app.take_bells(), 1);
    }

    #[test]
    fn test_submit_with_missing_field_alerts() {
        let settings = Settings::default();
        let mut app = app(&settings);
        fill(&mut app, "", "5", "Food");

        app.submit_form().unwrap();

        assert!(app.store.is_empty());
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Alert("Please fill in all fields.".into())
        );
    }

    #[test]
    fn test_delete_uses_full_list_index_under_filter() {
        let settings = Settings::default();
        let mut app = app(&settings);
        fill(&mut app, "Rent", "900", "Housing");
        app.submit_form().unwrap();
        fill(&mut app, "Coffee", "3", "Food");
        app.submit_form().unwrap();

        app.cycle_category_filter();
        app.cycle_category_filter();
        assert_eq!(app.category_filter.as_deref(), Some("Food"));

        app.delete_selected().unwrap();
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.expenses()[0].name, "Rent");
    }

    #[test]
    fn test_category_filter_wraps_to_all() {
        let settings = Settings::default();
        let mut app = app(&settings);
        fill(&mut app, "Rent", "900", "Housing");
        app.submit_form().unwrap();

        app.cycle_category_filter();
        assert_eq!(app.category_filter.as_deref(), Some("Housing"));
        app.cycle_category_filter();
        assert_eq!(app.category_filter, None);
    }

    #[test]
    fn test_edit_moves_expense_into_form() {
        let settings = Settings::default();
        let mut app = app(&settings);
        fill(&mut app, "Taxi", "20", "Transport");
        app.submit_form().unwrap();
        app.set_focus(Focus::List);

        app.edit_selected().unwrap();

        assert!(app.store.is_empty());
        assert_eq!(app.form.name.value(), "Taxi");
        assert_eq!(app.form.amount.value(), "20.00");
        assert_eq!(app.focus, Focus::Name);
    }

    #[test]
    fn test_budget_dialog_sets_limit_and_warns() {
        let settings = Settings::default();
        let mut app = app(&settings);
        fill(&mut app, "TV", "600", "Stuff");
        app.submit_form().unwrap();

        app.open_budget_dialog();
        app.budget_input.set_value("500");
        app.submit_budget().unwrap();

        assert!(!app.has_dialog());
        assert_eq!(app.store.budget_limit(), Money::from_cents(50_000));
        assert!(app.store.check_budget());
    }

    #[test]
    fn test_invalid_budget_alerts() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_budget_dialog();
        app.budget_input.set_value("lots");

        app.submit_budget().unwrap();

        assert!(matches!(app.active_dialog, ActiveDialog::Alert(_)));
        assert!(app.store.budget_limit().is_zero());
    }

    #[test]
    fn test_toggle_theme_persists() {
        let settings = Settings::default();
        let mut app = app(&settings);
        assert_eq!(app.theme.theme(), Theme::Light);

        app.toggle_theme().unwrap();

        assert_eq!(app.theme.theme(), Theme::Dark);
        assert_eq!(
            ThemeToggle::load(app.store.storage()).unwrap().theme(),
            Theme::Dark
        );
    }

    #[test]
    fn test_hover_cue_rings_once_per_focus_change() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.focus_next();
        app.focus_next();
        assert_eq!(app.take_bells(), 2);
        assert_eq!(app.take_bells(), 0);
    }
}
