//! Storage layer for the expense tracker
//!
//! Persistence goes through the [`KeyValueStore`] port: a handful of named
//! keys, each holding one JSON document. [`JsonFileStore`] keeps each key in
//! its own file under the data directory; [`MemoryStore`] keeps them in a map
//! for headless use and tests.

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use file_store::JsonFileStore;
pub use memory::MemoryStore;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// The keys the tracker persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Serialized array of expenses
    Expenses,
    /// Serialized budget limit, in cents
    BudgetLimit,
    /// `"light"` or `"dark"`
    Theme,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [Self::Expenses, Self::BudgetLimit, Self::Theme];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::BudgetLimit => "budgetLimit",
            Self::Theme => "theme",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port to a persistent key-value store
pub trait KeyValueStore {
    /// Read the document stored under `key`, if any
    fn get(&self, key: StorageKey) -> TrackerResult<Option<serde_json::Value>>;

    /// Replace the document stored under `key`
    fn set(&mut self, key: StorageKey, value: serde_json::Value) -> TrackerResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: StorageKey) -> TrackerResult<Option<serde_json::Value>> {
        (**self).get(key)
    }

    fn set(&mut self, key: StorageKey, value: serde_json::Value) -> TrackerResult<()> {
        (**self).set(key, value)
    }
}

/// Load and deserialize the value under `key`, falling back to `T::default()`
pub fn load<T, S>(store: &S, key: StorageKey) -> TrackerResult<T>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(value) => serde_json::from_value(value).map_err(|e| {
            TrackerError::Storage(format!("Failed to decode '{}': {}", key, e))
        }),
        None => Ok(T::default()),
    }
}

/// Serialize and store `data` under `key`
pub fn save<T, S>(store: &mut S, key: StorageKey, data: &T) -> TrackerResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let value = serde_json::to_value(data)?;
    tracing::debug!(key = %key, "persisting");
    store.set(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money, Theme};
    use chrono::NaiveDate;

    #[test]
    fn test_key_names() {
        let names: Vec<_> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["expenses", "budgetLimit", "theme"]);
    }

    #[test]
    fn test_load_missing_key_gives_default() {
        let store = MemoryStore::new();
        let expenses: Vec<Expense> = load(&store, StorageKey::Expenses).unwrap();
        let limit: Money = load(&store, StorageKey::BudgetLimit).unwrap();
        let theme: Theme = load(&store, StorageKey::Theme).unwrap();

        assert!(expenses.is_empty());
        assert!(limit.is_zero());
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_round_trip_each_key() {
        let mut store = MemoryStore::new();
        let expenses = vec![
            Expense::new(
                "Bus",
                Money::from_cents(275),
                "Transport",
                NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            ),
            Expense::new(
                "Lunch, with Sam",
                Money::from_cents(1899),
                "Food",
                NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
            ),
        ];

        save(&mut store, StorageKey::Expenses, &expenses).unwrap();
        save(&mut store, StorageKey::BudgetLimit, &Money::from_cents(10000)).unwrap();
        save(&mut store, StorageKey::Theme, &Theme::Dark).unwrap();

        let loaded: Vec<Expense> = load(&store, StorageKey::Expenses).unwrap();
        let limit: Money = load(&store, StorageKey::BudgetLimit).unwrap();
        let theme: Theme = load(&store, StorageKey::Theme).unwrap();

        assert_eq!(loaded, expenses);
        assert_eq!(limit, Money::from_cents(10000));
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_wrong_shape_is_storage_error() {
        let mut store = MemoryStore::new();
        store
            .set(StorageKey::Theme, serde_json::json!("purple"))
            .unwrap();

        let result: TrackerResult<Theme> = load(&store, StorageKey::Theme);
        assert!(matches!(result, Err(TrackerError::Storage(_))));
    }
}
