//! Save and load CLI commands
//!
//! Write the session ledger to another file, or merge another file into it.

use std::path::Path;

use crate::audit::AuditEntry;
use crate::display::format_load_summary;
use crate::error::LedgerResult;
use crate::storage::{LedgerStore, LoadMode};

use super::session::Session;

/// Write the session ledger to `path`
pub fn handle_save(session: &Session, path: &Path) -> LedgerResult<()> {
    LedgerStore::new(path).save(&session.ledger)?;
    session.record(AuditEntry::save(
        &path.display().to_string(),
        session.ledger.purchase_count(),
        session.ledger.balance(),
    ))?;

    println!("Purchases were saved!");
    Ok(())
}

/// Merge the ledger file at `path` into the session
///
/// A missing file is reported and is not an error. Balance lines add to the
/// current balance and purchases merge by label.
pub fn handle_load(session: &mut Session, path: &Path, lenient: bool) -> LedgerResult<()> {
    let mode = if lenient {
        LoadMode::Lenient
    } else {
        session.settings.load_mode
    };

    let summary = match LedgerStore::new(path).load_into(&mut session.ledger, mode) {
        Ok(summary) => summary,
        Err(e) if e.is_file_unavailable() => {
            println!("Nothing to load: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    session.commit()?;
    session.record(AuditEntry::load(
        &path.display().to_string(),
        &summary,
        session.ledger.balance(),
    ))?;

    println!("{}", format_load_summary(&summary, session.symbol()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    fn open_session(temp_dir: &TempDir) -> Session {
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("home"));
        Session::open(paths, Settings::default()).unwrap()
    }

    #[test]
    fn test_save_then_load_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let export = temp_dir.path().join("purchases.txt");

        let mut session = open_session(&temp_dir);
        session.ledger.add_income(Money::from_cents(1000)).unwrap();
        session.ledger.add_purchase(Category::Food, "Tea $2").unwrap();
        handle_save(&session, &export).unwrap();

        handle_load(&mut session, &export, false).unwrap();
        assert_eq!(session.ledger.balance_display(), "16.00");
        assert_eq!(session.ledger.purchase_count(), 1);

        let reopened = open_session(&temp_dir);
        assert_eq!(reopened.ledger.balance_display(), "16.00");
    }

    #[test]
    fn test_load_missing_file_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);

        handle_load(&mut session, &temp_dir.path().join("nope.txt"), false).unwrap();
        assert!(session.ledger.is_empty());
    }

    #[test]
    fn test_lenient_flag_overrides_strict_setting() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("mixed.txt");
        std::fs::write(&file, "Balance:3.00\nbad line\nFOOD:Tea $1\n").unwrap();

        let mut session = open_session(&temp_dir);
        assert!(handle_load(&mut session, &file, false).unwrap_err().is_parse());

        let mut session = open_session(&temp_dir);
        handle_load(&mut session, &file, true).unwrap();
        assert_eq!(session.ledger.balance_display(), "3.00");
        assert_eq!(session.ledger.purchase_count(), 1);
    }
}
