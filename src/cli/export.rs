//! CLI command for CSV export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::services::{ExpenseStore, Feedback};
use crate::storage::KeyValueStore;

/// Handle `export`: write the full list to `output`, or the configured file name
pub fn handle_export_command<S: KeyValueStore, F: Feedback>(
    store: &ExpenseStore<S, F>,
    settings: &Settings,
    output: Option<PathBuf>,
) -> TrackerResult<PathBuf> {
    let output = output.unwrap_or_else(|| PathBuf::from(&settings.export_file_name));

    let file = File::create(&output).map_err(|e| {
        TrackerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;

    store.export_csv(BufWriter::new(file))?;

    println!("Exported {} expenses to: {}", store.len(), output.display());

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(MemoryStore::new()).unwrap();
        store
            .add(&ExpenseDraft::new("Rent", "950", "Housing", "2025-07-01"))
            .unwrap();

        let target = temp_dir.path().join("out.csv");
        let written =
            handle_export_command(&store, &Settings::default(), Some(target.clone())).unwrap();

        assert_eq!(written, target);
        assert_eq!(
            std::fs::read_to_string(target).unwrap(),
            "Rent,950.00,Housing,2025-07-01\n"
        );
    }
}
