//! Backup CLI commands

use clap::Subcommand;

use crate::audit::{AuditEntry, AuditLogger};
use crate::backup::{BackupManager, RestoreManager};
use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Back up the session ledger now
    Create,

    /// List all available backups
    List,

    /// Replace the session ledger with a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,
    },
}

/// Handle a backup command
///
/// Works on the files directly and never decodes the session ledger, so a
/// corrupt session file can still be replaced from a backup.
pub fn handle_backup_command(
    paths: &LedgerPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> LedgerResult<()> {
    let manager = BackupManager::new(paths.clone(), settings.backup_retention.clone());

    match cmd {
        BackupCommands::Create => match manager.create_backup_with_retention()? {
            (Some(path), deleted) => {
                println!("Backup created: {}", path.display());
                if !deleted.is_empty() {
                    println!("Removed {} old backup(s).", deleted.len());
                }
            }
            (None, _) => println!("Nothing to back up yet."),
        },

        BackupCommands::List => {
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                println!("No backups found.");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            for (i, backup) in backups.iter().enumerate() {
                println!(
                    "  {}. {} ({}, {} bytes)",
                    i + 1,
                    backup.filename,
                    backup.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    backup.size_bytes
                );
            }
            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Restore { backup } => {
            let info = if backup == "latest" {
                manager
                    .get_latest_backup()?
                    .ok_or_else(|| LedgerError::Backup("No backups available".into()))?
            } else {
                manager.find_backup(&backup)?
            };

            // Keep the current ledger recoverable
            manager.create_backup()?;

            let result = RestoreManager::new(paths.clone()).restore_from_file(&info.path)?;

            // Pruned only after the restore so the chosen backup is still there
            manager.enforce_retention()?;

            if settings.audit_enabled {
                AuditLogger::new(paths.audit_log()).log(&AuditEntry::restore(&info.filename))?;
            }
            println!("{}", result.summary());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{LedgerStore, LoadMode};
    use std::fs;
    use tempfile::TempDir;

    fn setup(keep: u32) -> (TempDir, LedgerPaths, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        let mut settings = Settings::default();
        settings.backup_retention.keep = keep;
        (temp_dir, paths, settings)
    }

    fn session_balance(paths: &LedgerPaths) -> String {
        LedgerStore::session(paths)
            .unwrap()
            .load_or_default(LoadMode::Strict)
            .unwrap()
            .balance_display()
    }

    #[test]
    fn test_restore_over_corrupt_session_ledger() {
        let (_temp, paths, settings) = setup(10);
        fs::write(paths.ledger_file(), "Balance:10.00\n").unwrap();
        handle_backup_command(&paths, &settings, BackupCommands::Create).unwrap();
        fs::write(paths.ledger_file(), "garbage\n").unwrap();

        handle_backup_command(
            &paths,
            &settings,
            BackupCommands::Restore {
                backup: "latest".into(),
            },
        )
        .unwrap();

        assert_eq!(session_balance(&paths), "10.00");
        let logger = AuditLogger::new(paths.audit_log());
        assert_eq!(logger.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_restore_respects_retention() {
        let (_temp, paths, settings) = setup(2);
        let manager = BackupManager::new(paths.clone(), settings.backup_retention.clone());

        fs::write(paths.ledger_file(), "Balance:1.00\n").unwrap();
        let oldest = manager.create_backup().unwrap().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        fs::write(paths.ledger_file(), "Balance:2.00\n").unwrap();
        manager.create_backup().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        fs::write(paths.ledger_file(), "Balance:3.00\n").unwrap();

        let name = oldest.file_name().unwrap().to_string_lossy().to_string();
        handle_backup_command(&paths, &settings, BackupCommands::Restore { backup: name }).unwrap();

        assert_eq!(session_balance(&paths), "1.00");
        assert_eq!(manager.list_backups().unwrap().len(), 2);
        assert!(!oldest.exists());
    }
}
