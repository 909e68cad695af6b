//! Storage layer for the budget ledger
//!
//! Provides the text codec for ledgers and whole-file save/load with atomic
//! writes and automatic directory creation.

pub mod codec;
pub mod file_io;

pub use codec::{decode, decode_into, encode, LoadMode, LoadSummary, SkippedLine};
pub use file_io::{read_text, write_text_atomic};

use std::path::{Path, PathBuf};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::Ledger;

/// A ledger file on disk
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for an arbitrary file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the store for the session ledger under the data directory
    pub fn session(paths: &LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.ledger_file()))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Merge the file's contents into `ledger`
    ///
    /// Returns `FileUnavailable` if the file is missing or unreadable.
    pub fn load_into(&self, ledger: &mut Ledger, mode: LoadMode) -> LedgerResult<LoadSummary> {
        let text = read_text(&self.path)?;
        decode_into(ledger, &text, mode)
    }

    /// Load the file into a fresh ledger, or an empty ledger if there is no file
    pub fn load_or_default(&self, mode: LoadMode) -> LedgerResult<Ledger> {
        let mut ledger = Ledger::new();
        match self.load_into(&mut ledger, mode) {
            Ok(_) => Ok(ledger),
            Err(e) if e.is_file_unavailable() && !self.exists() => Ok(ledger),
            Err(e) => Err(e),
        }
    }

    /// Write the whole ledger to the file, replacing previous contents
    pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        write_text_atomic(&self.path, &encode(ledger))
    }
}
