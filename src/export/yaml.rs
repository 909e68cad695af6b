//! YAML export
//!
//! Same snapshot as the JSON export, for human-readable archives.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::models::Ledger;

/// Write the ledger as YAML with a short header comment
pub fn export_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    writeln!(writer, "# Budget ledger export")
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    #[test]
    fn test_yaml_export() {
        let mut ledger = Ledger::new();
        ledger.add_income(Money::from_cents(2000)).unwrap();
        ledger.add_purchase(Category::Clothes, "Socks $4.50").unwrap();

        let mut output = Vec::new();
        export_yaml(&ledger, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Budget ledger export"));
        assert!(text.contains("Socks $4.50"));

        let parsed: LedgerExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.balance.cents(), 1550);
    }
}
