//! Core data models for the budget ledger
//!
//! This module contains the data structures that represent the budgeting
//! domain: money amounts, spending categories, purchases and the ledger that
//! owns them.

pub mod category;
pub mod ledger;
pub mod money;
pub mod purchase;

pub use category::Category;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use purchase::{format_label, parse_label, Purchase, PRICE_DELIMITER};
