//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod analyze;
pub mod audit;
pub mod backup;
pub mod export;
pub mod file;
pub mod ledger;
pub mod session;

pub use analyze::{handle_analyze_command, AnalyzeCommands};
pub use audit::handle_audit;
pub use backup::{handle_backup_command, BackupCommands};
pub use export::handle_export;
pub use file::{handle_load, handle_save};
pub use ledger::{handle_balance, handle_income, handle_list, handle_purchase};
pub use session::Session;
