//! JSON export
//!
//! Exports the ledger with schema versioning and precomputed category totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Ledger, Money};
use crate::reports::CategoryTotals;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One purchase in an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedPurchase {
    pub label: String,
    pub name: String,
    pub price: Money,
    pub category: Category,
}

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Balance in cents
    pub balance: Money,

    /// Purchases in first-insertion order
    pub purchases: Vec<ExportedPurchase>,

    /// Per-category totals in code order
    pub category_totals: Vec<(Category, Money)>,

    /// Sum over all categories
    pub total_spending: Money,
}

impl LedgerExport {
    /// Build an export snapshot of a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let totals = CategoryTotals::generate(ledger);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            balance: ledger.balance(),
            purchases: ledger
                .purchases()
                .map(|p| ExportedPurchase {
                    label: p.label(),
                    name: p.name.clone(),
                    price: p.price,
                    category: p.category,
                })
                .collect(),
            category_totals: Category::all()
                .iter()
                .map(|&c| (c, totals.get(c)))
                .collect(),
            total_spending: totals.total,
        }
    }
}

/// Write the ledger as pretty-printed JSON
pub fn export_json<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export() {
        let mut ledger = Ledger::new();
        ledger.add_income(Money::from_cents(5000)).unwrap();
        ledger.add_purchase(Category::Food, "Lunch $9.994").unwrap();

        let mut output = Vec::new();
        export_json(&ledger, &mut output).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.balance.cents(), 4001);
        assert_eq!(parsed.purchases.len(), 1);
        assert_eq!(parsed.purchases[0].label, "Lunch $9.99");
        assert_eq!(parsed.total_spending.cents(), 999);
        assert_eq!(parsed.category_totals.len(), 4);
    }
}
