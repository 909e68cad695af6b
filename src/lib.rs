//! budget-ledger - a categorized personal expense ledger
//!
//! This library tracks a running balance and a set of categorized purchases,
//! persists them as a small line-oriented text file, and produces sorted
//! reports over the recorded spending.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: money, categories, purchases and the ledger aggregate
//! - `reports`: sorted purchase lists and per-category totals
//! - `storage`: the text codec and atomic whole-file save/load
//! - `config`: paths and user settings
//! - `audit`: append-only audit log of state changes
//! - `backup`: backups of the session ledger
//! - `export`: CSV, JSON and YAML export
//! - `display`: terminal formatting
//! - `cli`: command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust
//! use budget_ledger::models::{Category, Ledger, Money};
//! use budget_ledger::reports::all_purchases_sorted_descending;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_income(Money::from_cents(10000)).unwrap();
//! ledger.add_purchase(Category::Food, "Lunch $9.994").unwrap();
//!
//! assert_eq!(ledger.balance_display(), "90.01");
//! assert_eq!(all_purchases_sorted_descending(&ledger), vec!["Lunch $9.99"]);
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::LedgerError;
