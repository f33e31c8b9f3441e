//! Audit logging
//!
//! Every create, update and delete of a transaction or goal is appended to a
//! JSONL log with the before/after state and a short field diff.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
