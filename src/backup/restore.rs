//! Backup restoration
//!
//! A backup is decoded in strict mode before it replaces the session ledger,
//! so a corrupt backup never overwrites good data.

use std::path::{Path, PathBuf};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::Money;
use crate::storage::{self, LedgerStore};

/// Handles restoring from backups
pub struct RestoreManager {
    paths: LedgerPaths,
}

/// Outcome of a restore
#[derive(Debug, Clone)]
pub struct RestoreResult {
    /// Backup that was restored
    pub source: PathBuf,
    /// Balance of the restored ledger
    pub balance: Money,
    /// Number of purchases in the restored ledger
    pub purchase_count: usize,
}

impl RestoreResult {
    /// One-line description of the restore
    pub fn summary(&self) -> String {
        format!(
            "Restored {} purchase(s), balance {}",
            self.purchase_count, self.balance
        )
    }
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(paths: LedgerPaths) -> Self {
        Self { paths }
    }

    /// Replace the session ledger with a backup file
    ///
    /// The current session ledger is overwritten; callers should back it up
    /// first.
    pub fn restore_from_file(&self, backup_path: &Path) -> LedgerResult<RestoreResult> {
        let text = storage::read_text(backup_path)?;
        let ledger = storage::decode(&text)?;

        let store = LedgerStore::session(&self.paths)?;
        store.save(&ledger)?;

        Ok(RestoreResult {
            source: backup_path.to_path_buf(),
            balance: ledger.balance(),
            purchase_count: ledger.purchase_count(),
        })
    }
}
