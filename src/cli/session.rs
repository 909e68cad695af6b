//! Command-line session
//!
//! Every command works on the session ledger stored under the data directory:
//! it is loaded when the command starts and written back, after a backup of
//! the previous file, when the command changes it.

use crate::audit::{AuditEntry, AuditLogger};
use crate::backup::BackupManager;
use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::models::Ledger;
use crate::storage::{LedgerStore, LoadSummary};

/// The ledger of one command invocation plus what it needs to persist
pub struct Session {
    pub paths: LedgerPaths,
    pub settings: Settings,
    pub ledger: Ledger,
    store: LedgerStore,
    audit: Option<AuditLogger>,
}

impl Session {
    /// Load the session ledger (an empty ledger if none is saved yet)
    pub fn open(paths: LedgerPaths, settings: Settings) -> LedgerResult<Self> {
        let store = LedgerStore::session(&paths)?;
        let mut ledger = Ledger::new();

        if store.exists() {
            let summary = store.load_into(&mut ledger, settings.load_mode)?;
            warn_skipped(&summary);
        }

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            paths,
            settings,
            ledger,
            store,
            audit,
        })
    }

    /// Back up the previous session file and write the current ledger
    pub fn commit(&self) -> LedgerResult<()> {
        let manager = BackupManager::new(self.paths.clone(), self.settings.backup_retention.clone());
        manager.create_backup_with_retention()?;
        self.store.save(&self.ledger)
    }

    /// Append an entry to the audit log if auditing is enabled
    pub fn record(&self, entry: AuditEntry) -> LedgerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    /// Currency symbol for terminal output
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}

fn warn_skipped(summary: &LoadSummary) {
    for skipped in &summary.skipped {
        eprintln!(
            "Warning: skipped line {} of the session ledger ({}): {}",
            skipped.line, skipped.reason, skipped.content
        );
    }
}
