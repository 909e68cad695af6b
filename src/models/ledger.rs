//! The ledger aggregate
//!
//! Owns the running balance and the recorded purchases. Purchases are keyed by
//! their full label, so two purchases with the same name and the same rounded
//! price occupy a single slot: the later one replaces the earlier one's
//! category while keeping its position. The balance is still debited for both.

use std::collections::HashMap;

use super::category::Category;
use super::money::Money;
use super::purchase::{parse_label, Purchase};
use crate::error::{LedgerError, LedgerResult};

/// Balance plus categorized purchases for one session
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balance: Money,
    /// Purchases in first-insertion order
    purchases: Vec<Purchase>,
    /// Label -> position in `purchases`
    index: HashMap<String, usize>,
}

impl Ledger {
    /// Create an empty ledger with a zero balance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add income to the balance
    ///
    /// Negative amounts are accepted and reduce the balance. Fails with
    /// `Validation` if the new balance would leave the representable range,
    /// leaving the balance unchanged.
    pub fn add_income(&mut self, amount: Money) -> LedgerResult<()> {
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Balance out of range: {} + {}",
                self.balance, amount
            ))
        })?;
        Ok(())
    }

    /// Record a purchase from a `"<name> $<price>"` entry
    ///
    /// Fails with `MalformedEntry` if the entry cannot be parsed and with
    /// `InsufficientFunds` if the rounded price exceeds the balance. Neither
    /// failure changes the ledger.
    pub fn add_purchase(&mut self, category: Category, raw_entry: &str) -> LedgerResult<Purchase> {
        let (name, price) = parse_label(raw_entry)?;

        if self.balance < price {
            return Err(LedgerError::InsufficientFunds {
                needed: price,
                available: self.balance,
            });
        }

        self.balance -= price;
        let purchase = Purchase::new(name, price, category);
        self.merge_purchase(purchase.clone());
        Ok(purchase)
    }

    /// Record a purchase, resolving the category by name first
    pub fn add_purchase_named(
        &mut self,
        category_name: &str,
        raw_entry: &str,
    ) -> LedgerResult<Purchase> {
        let category = Category::from_name(category_name)?;
        self.add_purchase(category, raw_entry)
    }

    /// Store a purchase without touching the balance
    ///
    /// Used when merging persisted state. Returns the entry it replaced, if
    /// the label was already present.
    pub fn merge_purchase(&mut self, purchase: Purchase) -> Option<Purchase> {
        let label = purchase.label();
        match self.index.get(&label) {
            Some(&slot) => Some(std::mem::replace(&mut self.purchases[slot], purchase)),
            None => {
                self.index.insert(label, self.purchases.len());
                self.purchases.push(purchase);
                None
            }
        }
    }

    /// Current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Current balance as a two-decimal string ("90.01")
    pub fn balance_display(&self) -> String {
        self.balance.to_plain_string()
    }

    /// All stored purchases in first-insertion order
    pub fn purchases(&self) -> impl Iterator<Item = &Purchase> {
        self.purchases.iter()
    }

    /// Stored purchases belonging to one category, in first-insertion order
    pub fn purchases_in(&self, category: Category) -> impl Iterator<Item = &Purchase> {
        self.purchases
            .iter()
            .filter(move |p| p.category == category)
    }

    /// Look up a stored purchase by label
    pub fn get(&self, label: &str) -> Option<&Purchase> {
        self.index.get(label).map(|&slot| &self.purchases[slot])
    }

    /// Number of stored purchases
    pub fn purchase_count(&self) -> usize {
        self.purchases.len()
    }

    /// Number of stored purchases in a category
    pub fn count_in(&self, category: Category) -> usize {
        self.purchases_in(category).count()
    }

    /// Whether no purchases are stored
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }
}
