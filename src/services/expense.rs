//! Expense store
//!
//! Owns the working copy of the expense list for a session, keeps the
//! running total in step with it, and mirrors every committed change to the
//! storage port.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::export::export_expenses_csv;
use crate::models::{Expense, ExpenseDraft, Money};
use crate::storage::{self, KeyValueStore, StorageKey};

use super::feedback::{Cue, Feedback, NoFeedback};

/// Options for filtering the visible list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by name substring; an empty term matches everything
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    /// Filter by category; an empty category matches everything
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }

    fn matches(&self, expense: &Expense) -> bool {
        let name_ok = self
            .search
            .as_deref()
            .map_or(true, |term| expense.name_contains(term));
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| expense.category == category);
        name_ok && category_ok
    }
}

/// One visible row: an expense and its position in the full list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseRow<'a> {
    pub index: usize,
    pub expense: &'a Expense,
}

/// Everything a front end needs to draw the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseView<'a> {
    pub rows: Vec<ExpenseRow<'a>>,
    pub total: Money,
    pub budget_limit: Money,
    pub budget_warning: bool,
}

/// The expense list, its running total and the budget limit
pub struct ExpenseStore<S, F = NoFeedback> {
    storage: S,
    feedback: F,
    audit: Option<AuditLogger>,
    expenses: Vec<Expense>,
    total: Money,
    budget_limit: Money,
}

impl<S: KeyValueStore> ExpenseStore<S, NoFeedback> {
    /// Load the store without any feedback effects
    pub fn load(storage: S) -> TrackerResult<Self> {
        Self::load_with_feedback(storage, NoFeedback)
    }
}

impl<S: KeyValueStore, F: Feedback> ExpenseStore<S, F> {
    /// Load the expense list and budget limit from storage
    pub fn load_with_feedback(storage: S, feedback: F) -> TrackerResult<Self> {
        let expenses: Vec<Expense> = storage::load(&storage, StorageKey::Expenses)?;
        let budget_limit: Money = storage::load(&storage, StorageKey::BudgetLimit)?;
        let total = expenses.iter().map(|e| e.amount).sum();

        info!(count = expenses.len(), %total, %budget_limit, "loaded expenses");

        Ok(Self {
            storage,
            feedback,
            audit: None,
            expenses,
            total,
            budget_limit,
        })
    }

    /// Record mutations in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Running total of all stored amounts
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn budget_limit(&self) -> Money {
        self.budget_limit
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Validate a submitted form and append the expense
    ///
    /// On a validation or storage error the list and total are unchanged.
    pub fn add(&mut self, draft: &ExpenseDraft) -> TrackerResult<&Expense> {
        let expense = draft.validate()?;
        let total = self
            .total
            .checked_add(expense.amount)
            .ok_or_else(TrackerError::total_overflow)?;

        self.expenses.push(expense);
        if let Err(e) = self.persist_expenses() {
            self.expenses.pop();
            return Err(e);
        }

        let index = self.expenses.len() - 1;
        let expense = &self.expenses[index];
        self.total = total;

        if let Some(audit) = &self.audit {
            audit.log(&AuditEntry::create(
                EntityType::Expense,
                position_id(index),
                Some(expense.label()),
                expense,
            ))?;
        }

        self.feedback.cue(Cue::Added);
        self.feedback.celebrate();

        Ok(expense)
    }

    /// Remove the expense at `index`
    ///
    /// An out-of-range index is a no-op that logs a warning and returns `None`.
    pub fn delete(&mut self, index: usize) -> TrackerResult<Option<Expense>> {
        if index >= self.expenses.len() {
            warn!(index, len = self.expenses.len(), "delete: index out of range");
            return Ok(None);
        }

        let removed = self.expenses.remove(index);
        if let Err(e) = self.persist_expenses() {
            self.expenses.insert(index, removed);
            return Err(e);
        }
        self.total -= removed.amount;
        self.feedback.cue(Cue::Deleted);

        if let Some(audit) = &self.audit {
            audit.log(&AuditEntry::delete(
                EntityType::Expense,
                position_id(index),
                Some(removed.label()),
                &removed,
            ))?;
        }

        Ok(Some(removed))
    }

    /// Check that `draft` would be accepted as a replacement for the expense at `index`
    ///
    /// Nothing is changed. Returns the validated expense.
    pub fn check_replacement(
        &self,
        index: usize,
        draft: &ExpenseDraft,
    ) -> TrackerResult<Expense> {
        let expense = draft.validate()?;
        let rest = match self.expenses.get(index) {
            Some(current) => self.total - current.amount,
            None => self.total,
        };
        rest
            .checked_add(expense.amount)
            .ok_or_else(TrackerError::total_overflow)?;
        Ok(expense)
    }

    /// Take the expense at `index` out of the list and return its fields for the form
    ///
    /// The list is not persisted here: the record comes back when the draft
    /// is resubmitted through [`add`](Self::add), and is otherwise dropped
    /// for the rest of the session.
    pub fn edit(&mut self, index: usize) -> TrackerResult<Option<ExpenseDraft>> {
        if index >= self.expenses.len() {
            warn!(index, len = self.expenses.len(), "edit: index out of range");
            return Ok(None);
        }

        let removed = self.expenses.remove(index);
        self.total -= removed.amount;

        if let Some(audit) = &self.audit {
            audit.log(&AuditEntry::edit(
                EntityType::Expense,
                position_id(index),
                Some(removed.label()),
                &removed,
            ))?;
        }

        Ok(Some(ExpenseDraft::from(&removed)))
    }

    /// All rows, in list order
    pub fn rows(&self) -> Vec<ExpenseRow<'_>> {
        self.list(&ExpenseFilter::new())
    }

    /// Rows matching a filter, in list order
    pub fn list(&self, filter: &ExpenseFilter) -> Vec<ExpenseRow<'_>> {
        self.expenses
            .iter()
            .enumerate()
            .filter(|(_, expense)| filter.matches(expense))
            .map(|(index, expense)| ExpenseRow { index, expense })
            .collect()
    }

    /// Rows whose name contains `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<ExpenseRow<'_>> {
        self.list(&ExpenseFilter::new().search(term))
    }

    /// Rows in exactly `category`, or every row when `category` is empty
    pub fn filter_by_category(&self, category: &str) -> Vec<ExpenseRow<'_>> {
        self.list(&ExpenseFilter::new().category(category))
    }

    /// Distinct categories in the order they first appear
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for expense in &self.expenses {
            if !seen.contains(&expense.category.as_str()) {
                seen.push(&expense.category);
            }
        }
        seen
    }

    /// View of the full list
    pub fn render(&self) -> ExpenseView<'_> {
        self.render_rows(self.rows())
    }

    /// View of any subsequence of rows; the total always covers the full list
    pub fn render_rows<'a>(&'a self, rows: Vec<ExpenseRow<'a>>) -> ExpenseView<'a> {
        ExpenseView {
            rows,
            total: self.total,
            budget_limit: self.budget_limit,
            budget_warning: self.check_budget(),
        }
    }

    /// Write the full list as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        export_expenses_csv(&self.expenses, writer)
    }

    /// Set and persist the budget limit; returns whether the warning is now shown
    pub fn set_budget(&mut self, limit: Money) -> TrackerResult<bool> {
        if limit.is_negative() {
            return Err(TrackerError::Validation(
                "Budget limit cannot be negative.".into(),
            ));
        }

        storage::save(&mut self.storage, StorageKey::BudgetLimit, &limit)?;
        let before = std::mem::replace(&mut self.budget_limit, limit);

        if let Some(audit) = &self.audit {
            audit.log(&AuditEntry::update(
                EntityType::BudgetLimit,
                StorageKey::BudgetLimit.as_str(),
                None,
                &before,
                &limit,
            ))?;
        }

        Ok(self.check_budget())
    }

    /// Whether the budget warning is shown: total over a positive limit
    pub fn check_budget(&self) -> bool {
        self.budget_limit.is_positive() && self.total > self.budget_limit
    }

    /// Play the hover cue, for front ends that track focus
    pub fn hover(&mut self) {
        self.feedback.cue(Cue::Hover);
    }

    fn persist_expenses(&mut self) -> TrackerResult<()> {
        debug!(count = self.expenses.len(), "saving expense list");
        storage::save(&mut self.storage, StorageKey::Expenses, &self.expenses)
    }
}

fn position_id(index: usize) -> String {
    format!("#{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::feedback::RecordedFeedback;
    use crate::storage::{JsonFileStore, MemoryStore};
    use tempfile::TempDir;

    fn draft(name: &str, amount: &str, category: &str) -> ExpenseDraft {
        ExpenseDraft::new(name, amount, category, "2025-04-01")
    }

    fn store_with(drafts: &[ExpenseDraft]) -> ExpenseStore<MemoryStore, RecordedFeedback> {
        let mut store =
            ExpenseStore::load_with_feedback(MemoryStore::new(), RecordedFeedback::new(true))
                .unwrap();
        for d in drafts {
            store.add(d).unwrap();
        }
        store
    }

    fn sum_of(store: &ExpenseStore<MemoryStore, RecordedFeedback>) -> Money {
        store.expenses().iter().map(|e| e.amount).sum()
    }

    /// Memory store whose writes can be switched off
    #[derive(Default)]
    struct FailingStore {
        inner: MemoryStore,
        fail_writes: bool,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: StorageKey) -> TrackerResult<Option<serde_json::Value>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: StorageKey, value: serde_json::Value) -> TrackerResult<()> {
            if self.fail_writes {
                return Err(TrackerError::Storage("disk full".into()));
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_add_appends_persists_and_celebrates() {
        let mut store = store_with(&[]);
        let added = store.add(&draft("Coffee", "4.50", "Food")).unwrap();
        assert_eq!(added.name, "Coffee");

        assert_eq!(store.len(), 1);
        assert_eq!(store.total(), Money::from_cents(450));
        assert_eq!(store.storage().write_count(), 1);
        assert_eq!(store.feedback_mut().drain(), (vec![Cue::Added], 1));

        let persisted: Vec<Expense> = storage::load(store.storage(), StorageKey::Expenses).unwrap();
        assert_eq!(persisted, store.expenses());
    }

    #[test]
    fn test_invalid_add_leaves_store_unchanged() {
        let mut store = store_with(&[draft("Rent", "900", "Housing")]);
        store.feedback_mut().drain();
        let writes = store.storage().write_count();

        let bad = [
            draft("", "5", "Food"),
            draft("Snack", "five", "Food"),
            draft("Snack", "5", ""),
            ExpenseDraft::new("Snack", "5", "Food", ""),
        ];
        for d in &bad {
            let err = store.add(d).unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.total(), Money::from_cents(90000));
        assert_eq!(store.storage().write_count(), writes);
        assert_eq!(store.feedback_mut().drain(), (vec![], 0));
    }

    #[test]
    fn test_total_tracks_adds_and_deletes() {
        let mut store = store_with(&[
            draft("A", "10.10", "x"),
            draft("B", "0.20", "y"),
            draft("C", "3", "x"),
            draft("D", "99.99", "z"),
        ]);
        assert_eq!(store.total(), sum_of(&store));

        store.delete(1).unwrap();
        assert_eq!(store.total(), sum_of(&store));

        store.add(&draft("E", "0.01", "y")).unwrap();
        store.delete(0).unwrap();
        store.delete(store.len() - 1).unwrap();
        assert_eq!(store.total(), sum_of(&store));
        assert_eq!(store.total(), Money::from_cents(300 + 9999));
    }

    #[test]
    fn test_delete_removes_exactly_that_record_once() {
        let mut store = store_with(&[
            draft("Tea", "2", "Food"),
            draft("Taxi", "15", "Transport"),
            draft("Book", "12", "Leisure"),
        ]);
        store.feedback_mut().drain();

        let removed = store.delete(1).unwrap().unwrap();
        assert_eq!(removed.name, "Taxi");
        assert_eq!(store.total(), Money::from_cents(1400));

        let names: Vec<_> = store.expenses().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Book"]);
        assert_eq!(store.feedback_mut().drain(), (vec![Cue::Deleted], 0));
    }

    #[test]
    fn test_out_of_range_is_a_noop() {
        let mut store = store_with(&[draft("Tea", "2", "Food")]);
        let writes = store.storage().write_count();

        assert!(store.delete(5).unwrap().is_none());
        assert!(store.edit(1).unwrap().is_none());

        assert_eq!(store.len(), 1);
        assert_eq!(store.total(), Money::from_cents(200));
        assert_eq!(store.storage().write_count(), writes);
    }

    #[test]
    fn test_edit_removes_without_persisting() {
        let mut store = store_with(&[draft("Tea", "2", "Food"), draft("Taxi", "15.5", "Transport")]);
        let writes = store.storage().write_count();

        let form = store.edit(1).unwrap().unwrap();
        assert_eq!(
            form,
            ExpenseDraft::new("Taxi", "15.50", "Transport", "2025-04-01")
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.total(), Money::from_cents(200));
        assert_eq!(store.storage().write_count(), writes);

        let persisted: Vec<Expense> = storage::load(store.storage(), StorageKey::Expenses).unwrap();
        assert_eq!(persisted.len(), 2);

        store.add(&form).unwrap();
        assert_eq!(store.expenses()[1].name, "Taxi");
        assert_eq!(store.total(), Money::from_cents(1750));
    }

    #[test]
    fn test_search_and_category_filter() {
        let store = store_with(&[
            draft("Coffee", "4", "Food"),
            draft("Bus ticket", "3", "Transport"),
            draft("coffee beans", "12", "Groceries"),
        ]);

        assert_eq!(store.search("").len(), 3);
        assert!(store.search("zzz").is_empty());

        let hits: Vec<_> = store.search("COFFEE").iter().map(|r| r.index).collect();
        assert_eq!(hits, vec![0, 2]);

        let transport = store.filter_by_category("Transport");
        assert_eq!(transport.len(), 1);
        assert_eq!(transport[0].index, 1);
        assert_eq!(store.filter_by_category("").len(), 3);
        assert!(store.filter_by_category("transport").is_empty());

        let both = store.list(&ExpenseFilter::new().search("coffee").category("Food"));
        assert_eq!(both.len(), 1);
    }

    #[test]
    fn test_render_filtered_keeps_full_total() {
        let store = store_with(&[draft("Coffee", "4", "Food"), draft("Bus", "3", "Transport")]);

        let view = store.render_rows(store.search("nothing matches"));
        assert!(view.rows.is_empty());
        assert_eq!(view.total, Money::from_cents(700));
        assert_eq!(store.len(), 2);

        let full = store.render();
        assert_eq!(full.rows.len(), 2);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let store = store_with(&[
            draft("a", "1", "Food"),
            draft("b", "1", "Rent"),
            draft("c", "1", "Food"),
        ]);
        assert_eq!(store.categories(), vec!["Food", "Rent"]);
    }

    #[test]
    fn test_budget_warning() {
        let mut store = store_with(&[draft("Groceries", "120", "Food")]);

        assert!(!store.check_budget(), "limit 0 never warns");

        assert!(store.set_budget(Money::from_cents(10000)).unwrap());
        assert!(store.render().budget_warning);

        store.delete(0).unwrap();
        store.add(&draft("Groceries", "80", "Food")).unwrap();
        assert!(!store.check_budget());

        store.add(&draft("Extra", "20", "Food")).unwrap();
        assert!(!store.check_budget(), "equal to the limit is not over it");

        assert!(store.set_budget(Money::zero()).is_ok());
        store.add(&draft("Big", "1000", "Food")).unwrap();
        assert!(!store.check_budget());
    }

    #[test]
    fn test_negative_budget_rejected() {
        let mut store = store_with(&[]);
        let err = store.set_budget(Money::from_cents(-1)).unwrap_err();
        assert!(err.is_validation());
        assert!(store.budget_limit().is_zero());
    }

    #[test]
    fn test_export_csv_uses_full_list() {
        let store = store_with(&[draft("Coffee", "4.5", "Food"), draft("Bus", "3", "Transport")]);
        let mut out = Vec::new();
        store.export_csv(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Coffee,4.50,Food,2025-04-01\nBus,3.00,Transport,2025-04-01\n"
        );
    }

    #[test]
    fn test_reload_from_files_recomputes_total() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut store = ExpenseStore::load(JsonFileStore::new(temp_dir.path())).unwrap();
            store.add(&draft("Tea", "2.25", "Food")).unwrap();
            store.add(&draft("Cab", "30", "Transport")).unwrap();
            store.set_budget(Money::from_cents(3000)).unwrap();
        }

        let store = ExpenseStore::load(JsonFileStore::new(temp_dir.path())).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.total(), Money::from_cents(3225));
        assert_eq!(store.budget_limit(), Money::from_cents(3000));
        assert!(store.check_budget());
    }

    #[test]
    fn test_add_rejects_total_overflow() {
        let max = "92233720368547758.07";
        let mut store = store_with(&[draft("Yacht", max, "Fun")]);
        store.feedback_mut().drain();
        let writes = store.storage().write_count();

        let err = store.add(&draft("Jet", max, "Fun")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Amount is too large for the running total.");

        assert_eq!(store.len(), 1);
        assert_eq!(store.total().cents(), i64::MAX);
        assert_eq!(store.storage().write_count(), writes);
        assert_eq!(store.feedback_mut().drain(), (vec![], 0));
    }

    #[test]
    fn test_storage_failure_rolls_back_add_and_delete() {
        let mut store =
            ExpenseStore::load_with_feedback(FailingStore::default(), RecordedFeedback::new(true))
                .unwrap();
        store.add(&draft("Rent", "900", "Housing")).unwrap();
        store.add(&draft("Tea", "4", "Food")).unwrap();
        store.feedback_mut().drain();
        let writes = store.storage().inner.write_count();
        let before = store.expenses().to_vec();

        store.storage_mut().fail_writes = true;

        let err = store.add(&draft("Cab", "9", "Transport")).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
        let err = store.delete(0).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));

        assert_eq!(store.expenses(), before.as_slice());
        assert_eq!(store.total(), Money::from_cents(90400));
        assert_eq!(store.storage().inner.write_count(), writes);
        assert_eq!(store.feedback_mut().drain(), (vec![], 0));

        store.storage_mut().fail_writes = false;
        store.delete(0).unwrap();
        assert_eq!(store.feedback_mut().drain(), (vec![Cue::Deleted], 0));
        assert_eq!(store.total(), Money::from_cents(400));
    }

    #[test]
    fn test_check_replacement_changes_nothing() {
        let mut store = store_with(&[
            draft("Rent", "900", "Housing"),
            draft("Tea", "4", "Food"),
        ]);
        store.feedback_mut().drain();
        let writes = store.storage().write_count();

        let ok = store
            .check_replacement(0, &draft("Rent", "950", "Housing"))
            .unwrap();
        assert_eq!(ok.amount, Money::from_cents(95000));
        assert!(store
            .check_replacement(0, &draft("Rent", "lots", "Housing"))
            .unwrap_err()
            .is_validation());

        // Replacing the only large amount leaves room for another large one
        let max = "92233720368547758.07";
        let mut big = store_with(&[draft("Yacht", max, "Fun")]);
        assert!(big.check_replacement(0, &draft("Jet", max, "Fun")).is_ok());
        big.add(&draft("Gum", "0", "Food")).unwrap();
        assert!(big
            .check_replacement(1, &draft("Jet", max, "Fun"))
            .unwrap_err()
            .is_validation());

        assert_eq!(store.len(), 2);
        assert_eq!(store.total(), Money::from_cents(90400));
        assert_eq!(store.storage().write_count(), writes);
        assert_eq!(store.feedback_mut().drain(), (vec![], 0));
    }

    #[test]
    fn test_audit_records_mutations() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut store = ExpenseStore::load(MemoryStore::new())
            .unwrap()
            .with_audit(logger.clone());

        store.add(&draft("Tea", "2", "Food")).unwrap();
        store.add(&draft("Cab", "9", "Transport")).unwrap();
        store.edit(0).unwrap();
        store.delete(0).unwrap();
        store.set_budget(Money::from_cents(500)).unwrap();
        store.delete(42).unwrap();

        let ops: Vec<String> = logger
            .read_all()
            .unwrap()
            .iter()
            .map(|e| format!("{} {}", e.operation, e.entity_id))
            .collect();
        assert_eq!(
            ops,
            vec![
                "CREATE #1",
                "CREATE #2",
                "EDIT #1",
                "DELETE #1",
                "UPDATE budgetLimit"
            ]
        );
    }
}
