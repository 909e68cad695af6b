//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;

/// Show the most recent audit entries
pub fn handle_audit(paths: &LedgerPaths, limit: usize) -> LedgerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_line());
    }

    Ok(())
}
