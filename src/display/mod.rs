//! Display formatting for terminal output
//!
//! Turns the plain data returned by the ledger and its reports into text.
//! Nothing here changes state.

pub mod report;

pub use report::{
    format_balance, format_category_listing, format_category_totals, format_purchases_with_total,
    format_load_summary, format_purchase_list, EMPTY_LIST_MESSAGE,
};
