//! Audit logging system for smsledger
//!
//! Records every ledger create and delete in an append-only audit log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and the entity's JSON state.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
