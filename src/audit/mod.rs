//! Audit logging for the expense tracker
//!
//! Records every add, delete, edit and budget change in an append-only
//! JSON-lines log.
//!
//! - `AuditEntry`: one log entry with timestamp, operation, entity information,
//!   and optional before/after values.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
