//! Report display formatting

use crate::models::{Category, Ledger, Money, Purchase};
use crate::reports::{CategoryListing, CategoryTotals};
use crate::storage::LoadSummary;

/// Shown when there is nothing to list
pub const EMPTY_LIST_MESSAGE: &str = "The purchase list is empty!";

/// Format the balance line
pub fn format_balance(balance: Money, symbol: &str) -> String {
    format!("Balance: {}", balance.format_with_symbol(symbol))
}

/// Format a titled list of purchase labels followed by their total
pub fn format_purchases_with_total<'a, I>(title: &str, purchases: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Purchase>,
{
    let mut output = format!("{}:\n", title);
    let mut total = Money::zero();
    for purchase in purchases {
        output.push_str(&purchase.label());
        output.push('\n');
        total = total.saturating_add(purchase.price);
    }

    output.push_str(&format!("Total sum: {}", total.format_with_symbol(symbol)));
    output
}

/// Format stored purchases in insertion order, optionally for one category
pub fn format_purchase_list(ledger: &Ledger, category: Option<Category>, symbol: &str) -> String {
    let (title, purchases): (&str, Vec<&Purchase>) = match category {
        Some(c) => (c.display_name(), ledger.purchases_in(c).collect()),
        None => ("All", ledger.purchases().collect()),
    };

    if purchases.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    format_purchases_with_total(title, purchases, symbol)
}

/// Format one category's sorted listing
pub fn format_category_listing(category: Category, listing: &CategoryListing, symbol: &str) -> String {
    match listing {
        CategoryListing::Empty => EMPTY_LIST_MESSAGE.to_string(),
        CategoryListing::Purchases(purchases) => {
            format_purchases_with_total(category.display_name(), purchases, symbol)
        }
    }
}

/// Format the per-category totals, largest first, then the grand total
pub fn format_category_totals(totals: &CategoryTotals, symbol: &str) -> String {
    let mut output = String::from("Types:\n");

    for row in &totals.rows {
        output.push_str(&format!(
            "{} - {}\n",
            row.category.display_name(),
            row.total.format_with_symbol(symbol)
        ));
    }

    output.push_str(&format!(
        "Total sum: {}",
        totals.total.format_with_symbol(symbol)
    ));
    output
}

/// Format the result of merging a ledger file
pub fn format_load_summary(summary: &LoadSummary, symbol: &str) -> String {
    let mut output = format!(
        "Purchases were loaded! ({} purchase line(s), balance +{})",
        summary.purchases_merged,
        summary.balance_added.format_with_symbol(symbol)
    );

    for skipped in &summary.skipped {
        output.push_str(&format!(
            "\n  skipped line {} ({}): {}",
            skipped.line, skipped.reason, skipped.content
        ));
    }

    output
}
