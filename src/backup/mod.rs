//! Backup system for the budget ledger
//!
//! Before the session ledger is overwritten, the previous file is copied into
//! the backup directory. Backups are plain ledger files, so any of them can be
//! loaded or restored directly.
//!
//! - `BackupManager`: creates, lists and prunes backups
//! - `RestoreManager`: validates a backup and puts it back as the session ledger
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_ledger::backup::{BackupManager, RestoreManager};
//!
//! let manager = BackupManager::new(paths.clone(), settings.backup_retention.clone());
//! manager.create_backup_with_retention()?;
//!
//! let restore = RestoreManager::new(paths);
//! let result = restore.restore_from_file(&backup_path)?;
//! println!("{}", result.summary());
//! ```

mod manager;
mod restore;

pub use manager::{BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreResult};
