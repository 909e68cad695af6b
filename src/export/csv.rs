//! CSV export of purchases

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;
use crate::reports::sort_descending;

/// Write purchases as CSV, most expensive first
///
/// Columns: `Name,Category,Code,Price`.
pub fn export_purchases_csv<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Name", "Category", "Code", "Price"])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for purchase in sort_descending(ledger.purchases()) {
        let code = purchase.category.code().to_string();
        let price = purchase.price.to_plain_string();
        csv_writer
            .write_record([
                purchase.name.as_str(),
                purchase.category.name(),
                code.as_str(),
                price.as_str(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    #[test]
    fn test_csv_export() {
        let mut ledger = Ledger::new();
        ledger.add_income(Money::from_cents(10000)).unwrap();
        ledger.add_purchase(Category::Food, "Milk $3.50").unwrap();
        ledger.add_purchase(Category::Other, "Card, birthday $4").unwrap();

        let mut output = Vec::new();
        export_purchases_csv(&ledger, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(
            text,
            "Name,Category,Code,Price\n\"Card, birthday\",OTHER,4,4.00\nMilk,FOOD,1,3.50\n"
        );
    }
}
