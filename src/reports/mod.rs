//! Reports module for the budget ledger
//!
//! Read-only aggregations over a ledger: every purchase sorted by price, the
//! per-category totals, and the sorted purchases of a single category.
//!
//! Sorting is by price descending. Equal prices keep first-insertion order.

pub mod category_purchases;
pub mod category_totals;
pub mod sorted_purchases;

pub use category_purchases::{purchases_for_category, CategoryListing};
pub use category_totals::{CategoryTotal, CategoryTotals, TOTAL_KEY};
pub use sorted_purchases::{all_purchases_sorted_descending, sort_descending};
