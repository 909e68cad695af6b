//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use crate::error::LedgerError;

/// Read a whole text file
///
/// A missing or unreadable file is `FileUnavailable`, which callers treat as
/// "nothing to load".
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, LedgerError> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LedgerError::FileUnavailable(format!("{} not found", path.display())),
        _ => LedgerError::FileUnavailable(format!("Failed to open {}: {}", path.display(), e)),
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        LedgerError::FileUnavailable(format!("Failed to read {}: {}", path.display(), e))
    })?;

    Ok(contents)
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), LedgerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let mut file = File::create(&temp_path)
        .map_err(|e| LedgerError::Io(format!("Failed to create temp file: {}", e)))?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|_| file.flush())
        .and_then(|_| file.sync_all());
    drop(file);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(LedgerError::Io(format!("Failed to write {}: {}", path.display(), e)));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
