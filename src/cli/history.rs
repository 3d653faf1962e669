//! CLI command for reading the audit log

use crate::audit::AuditLogger;
use crate::error::TrackerResult;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_history_command(logger: &AuditLogger, limit: usize) -> TrackerResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
