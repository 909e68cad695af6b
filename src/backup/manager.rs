//! Backup manager
//!
//! Handles rolling backups of the session ledger with a retention limit.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

use crate::config::paths::LedgerPaths;
use crate::config::settings::BackupRetention;
use crate::error::{LedgerError, LedgerResult};

const BACKUP_PREFIX: &str = "ledger-";
const BACKUP_EXTENSION: &str = "txt";

/// Metadata about a backup
#[derive(Debug, Clone, Serialize)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    ledger_file: PathBuf,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: LedgerPaths, retention: BackupRetention) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            ledger_file: paths.ledger_file(),
            retention,
        }
    }

    /// Copy the session ledger into the backup directory
    ///
    /// Returns `None` when there is no session ledger yet.
    pub fn create_backup(&self) -> LedgerResult<Option<PathBuf>> {
        if !self.ledger_file.exists() {
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| LedgerError::Backup(format!("Failed to create backup directory: {}", e)))?;

        // Never overwrite an existing backup made in the same millisecond
        let mut stamp = Utc::now();
        let mut backup_path = self.backup_path_at(stamp);
        while backup_path.exists() {
            stamp += Duration::milliseconds(1);
            backup_path = self.backup_path_at(stamp);
        }

        fs::copy(&self.ledger_file, &backup_path)
            .map_err(|e| LedgerError::Backup(format!("Failed to write backup file: {}", e)))?;

        Ok(Some(backup_path))
    }

    fn backup_path_at(&self, stamp: DateTime<Utc>) -> PathBuf {
        self.backup_dir.join(format!(
            "{}{}-{:03}.{}",
            BACKUP_PREFIX,
            stamp.format("%Y%m%d-%H%M%S"),
            stamp.timestamp_subsec_millis(),
            BACKUP_EXTENSION
        ))
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> LedgerResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| LedgerError::Backup(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| LedgerError::Backup(format!("Failed to read directory entry: {}", e)))?;

            if let Some(info) = parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Delete backups beyond the retention limit, oldest first
    pub fn enforce_retention(&self) -> LedgerResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self
            .list_backups()?
            .into_iter()
            .skip(self.retention.keep as usize)
        {
            fs::remove_file(&backup.path)
                .map_err(|e| LedgerError::Backup(format!("Failed to delete old backup: {}", e)))?;
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    /// Create a backup and then enforce the retention policy
    pub fn create_backup_with_retention(&self) -> LedgerResult<(Option<PathBuf>, Vec<PathBuf>)> {
        let backup_path = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// Resolve a backup by filename or path
    pub fn find_backup(&self, name: &str) -> LedgerResult<BackupInfo> {
        let candidate = Path::new(name);
        let path = if candidate.is_absolute() || candidate.components().count() > 1 {
            candidate.to_path_buf()
        } else {
            self.backup_dir.join(name)
        };

        if !path.exists() {
            return Err(LedgerError::Backup(format!("Backup not found: {}", name)));
        }

        parse_backup_info(&path)
            .ok_or_else(|| LedgerError::Backup(format!("Not a ledger backup: {}", name)))
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> LedgerResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }

    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }
}

/// Parse backup info from a backup file name and metadata
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let stamp = filename
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let created_at = parse_backup_timestamp(stamp)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse `YYYYMMDD-HHMMSS-mmm` into a UTC timestamp
fn parse_backup_timestamp(stamp: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = stamp.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let (date_part, time_part) = (parts[0], parts[1]);
    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let year: i32 = date_part.get(0..4)?.parse().ok()?;
    let month: u32 = date_part.get(4..6)?.parse().ok()?;
    let day: u32 = date_part.get(6..8)?.parse().ok()?;
    let hour: u32 = time_part.get(0..2)?.parse().ok()?;
    let minute: u32 = time_part.get(2..4)?.parse().ok()?;
    let second: u32 = time_part.get(4..6)?.parse().ok()?;
    let millis: u32 = parts[2].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;

    Some(DateTime::from_naive_utc_and_offset(
        NaiveDateTime::new(date, time),
        Utc,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use tempfile::TempDir;

    fn create_test_manager(keep: u32) -> (BackupManager, LedgerPaths, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        fs::write(paths.ledger_file(), "Balance:1.00\n").unwrap();

        let manager = BackupManager::new(paths.clone(), BackupRetention { keep });
        (manager, paths, temp_dir)
    }

    #[test]
    fn test_create_backup() {
        let (manager, _paths, _temp) = create_test_manager(3);

        let backup_path = manager.create_backup().unwrap().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().contains("ledger-"));
        assert_eq!(fs::read_to_string(backup_path).unwrap(), "Balance:1.00\n");
    }

    #[test]
    fn test_no_ledger_no_backup() {
        let (manager, paths, _temp) = create_test_manager(3);
        fs::remove_file(paths.ledger_file()).unwrap();

        assert!(manager.create_backup().unwrap().is_none());
        assert!(manager.list_backups().unwrap().is_empty());
    }

    #[test]
    fn test_list_backups_newest_first() {
        let (manager, _paths, _temp) = create_test_manager(3);

        manager.create_backup().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        manager.create_backup().unwrap();

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert!(backups[0].created_at > backups[1].created_at);
    }

    #[test]
    fn test_back_to_back_backups_do_not_collide() {
        let (manager, paths, _temp) = create_test_manager(10);

        let first = manager.create_backup().unwrap().unwrap();
        fs::write(paths.ledger_file(), "Balance:2.00\n").unwrap();
        let second = manager.create_backup().unwrap().unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(first).unwrap(), "Balance:1.00\n");
        assert_eq!(manager.list_backups().unwrap().len(), 2);
    }

    #[test]
    fn test_retention_policy() {
        let (manager, _paths, _temp) = create_test_manager(3);

        for _ in 0..5 {
            manager.create_backup().unwrap();
            std::thread::sleep(std::time::Duration::from_millis(20));
        }

        let deleted = manager.enforce_retention().unwrap();
        assert_eq!(deleted.len(), 2);
        assert_eq!(manager.list_backups().unwrap().len(), 3);
    }

    #[test]
    fn test_unrelated_files_ignored() {
        let (manager, _paths, _temp) = create_test_manager(3);
        fs::write(manager.backup_dir().join("notes.txt"), "hello").unwrap();

        assert!(manager.list_backups().unwrap().is_empty());
    }

    #[test]
    fn test_find_backup() {
        let (manager, _paths, _temp) = create_test_manager(3);
        let path = manager.create_backup().unwrap().unwrap();
        let filename = path.file_name().unwrap().to_string_lossy().to_string();

        assert_eq!(manager.find_backup(&filename).unwrap().path, path);
        assert!(manager.find_backup("ledger-20250101-000000-000.txt").is_err());
        assert_eq!(manager.get_latest_backup().unwrap().unwrap().path, path);
    }

    #[test]
    fn test_parse_backup_timestamp() {
        let timestamp = parse_backup_timestamp("20251127-143022-456").unwrap();
        assert_eq!(timestamp.year(), 2025);
        assert_eq!(timestamp.month(), 11);
        assert_eq!(timestamp.day(), 27);
        assert_eq!(timestamp.timestamp_subsec_millis(), 456);

        assert!(parse_backup_timestamp("20251127-143022").is_none());
        assert!(parse_backup_timestamp("garbage").is_none());
    }
}
