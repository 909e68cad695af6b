//! Purchases of a single category

use serde::Serialize;

use super::sorted_purchases::sort_descending;
use crate::error::LedgerResult;
use crate::models::{Category, Ledger, Money, Purchase};

/// Result of listing one category's purchases
///
/// `Empty` means no stored purchase belongs to the category at all, which a
/// caller reports as "the list is empty". It is never produced for a category
/// that merely sums to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "purchases", rename_all = "lowercase")]
pub enum CategoryListing {
    Empty,
    Purchases(Vec<Purchase>),
}

impl CategoryListing {
    /// Whether the category had no purchases
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Purchases in the listing, most expensive first
    pub fn purchases(&self) -> &[Purchase] {
        match self {
            Self::Empty => &[],
            Self::Purchases(purchases) => purchases,
        }
    }

    /// Labels in the listing, most expensive first
    pub fn labels(&self) -> Vec<String> {
        self.purchases().iter().map(Purchase::label).collect()
    }

    /// Sum of the listed prices
    pub fn total(&self) -> Money {
        self.purchases().iter().map(|p| p.price).sum()
    }
}

/// Purchases for the category with the given code, most expensive first
///
/// Fails with `UnknownCategory` if the code is outside the taxonomy.
pub fn purchases_for_category(ledger: &Ledger, code: u8) -> LedgerResult<CategoryListing> {
    let category = Category::from_code(code)?;
    Ok(listing_for(ledger, category))
}

/// Purchases for a resolved category, most expensive first
pub fn listing_for(ledger: &Ledger, category: Category) -> CategoryListing {
    let sorted = sort_descending(ledger.purchases_in(category));
    if sorted.is_empty() {
        return CategoryListing::Empty;
    }
    CategoryListing::Purchases(sorted.into_iter().cloned().collect())
}
