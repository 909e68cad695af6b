//! Audit logging for the budget ledger
//!
//! Records every state change made through the command line in an append-only
//! log, one JSON object per line.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, summary and
//!   optional structured details.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::income(amount, ledger.balance()))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
