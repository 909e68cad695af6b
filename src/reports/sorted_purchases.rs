//! Purchases sorted by price

use crate::models::{Ledger, Purchase};

/// Sort purchases by price descending
///
/// The sort is stable, so purchases with equal prices stay in the order the
/// iterator produced them.
pub fn sort_descending<'a, I>(purchases: I) -> Vec<&'a Purchase>
where
    I: IntoIterator<Item = &'a Purchase>,
{
    let mut sorted: Vec<&Purchase> = purchases.into_iter().collect();
    sorted.sort_by(|a, b| b.price.cmp(&a.price));
    sorted
}

/// Labels of every stored purchase, most expensive first
pub fn all_purchases_sorted_descending(ledger: &Ledger) -> Vec<String> {
    sort_descending(ledger.purchases())
        .into_iter()
        .map(Purchase::label)
        .collect()
}
