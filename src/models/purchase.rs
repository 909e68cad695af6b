//! Purchase model
//!
//! A purchase is a structured record. The `"<name> $<price>"` label form only
//! exists at the edges: user entry and the persisted file.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Separator between a purchase name and its price in a label
pub const PRICE_DELIMITER: char = '$';

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    /// Free-text display name
    pub name: String,

    /// Price, already rounded to cents
    pub price: Money,

    /// Spending category
    pub category: Category,
}

impl Purchase {
    /// Create a new purchase
    pub fn new(name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            category,
        }
    }

    /// Build a purchase from a `"<name> $<price>"` label
    pub fn from_label(label: &str, category: Category) -> LedgerResult<Self> {
        let (name, price) = parse_label(label)?;
        Ok(Self::new(name, price, category))
    }

    /// Encoded label, `"<name> $<price>"` with a two-decimal price
    pub fn label(&self) -> String {
        format_label(&self.name, self.price)
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Render a label from its parts
pub fn format_label(name: &str, price: Money) -> String {
    if name.is_empty() {
        format!("{}{}", PRICE_DELIMITER, price.to_plain_string())
    } else {
        format!("{} {}{}", name, PRICE_DELIMITER, price.to_plain_string())
    }
}

/// Split a label into its name and rounded price
///
/// The last `$` separates the name from the price. Trailing whitespace is
/// dropped from the name. Negative prices and line breaks are rejected, since
/// a persisted purchase must fit on one line.
pub fn parse_label(label: &str) -> LedgerResult<(String, Money)> {
    if label.contains(|c: char| c == '\n' || c == '\r') {
        return Err(LedgerError::MalformedEntry(format!(
            "line breaks are not allowed: {:?}",
            label
        )));
    }

    let (name, price_text) = label.rsplit_once(PRICE_DELIMITER).ok_or_else(|| {
        LedgerError::MalformedEntry(format!("missing '{}' before the price: {}", PRICE_DELIMITER, label))
    })?;

    let price = Money::parse(price_text)
        .map_err(|e| LedgerError::MalformedEntry(format!("{} in entry: {}", e, label)))?;

    if price.is_negative() {
        return Err(LedgerError::MalformedEntry(format!(
            "price cannot be negative: {}",
            label
        )));
    }

    Ok((name.trim_end().to_string(), price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        let (name, price) = parse_label("Lunch $9.994").unwrap();
        assert_eq!(name, "Lunch");
        assert_eq!(price.cents(), 999);
    }

    #[test]
    fn test_label_uses_rounded_price() {
        let purchase = Purchase::from_label("Lunch $9.994", Category::Food).unwrap();
        assert_eq!(purchase.label(), "Lunch $9.99");
        assert_eq!(purchase.to_string(), "Lunch $9.99");
    }

    #[test]
    fn test_last_dollar_separates_price() {
        let (name, price) = parse_label("Ke$ha tickets $45").unwrap();
        assert_eq!(name, "Ke$ha tickets");
        assert_eq!(price.cents(), 4500);
    }

    #[test]
    fn test_integer_price_is_padded() {
        let purchase = Purchase::from_label("Gift $20", Category::Other).unwrap();
        assert_eq!(purchase.label(), "Gift $20.00");
    }

    #[test]
    fn test_empty_name() {
        let purchase = Purchase::from_label("$5", Category::Other).unwrap();
        assert_eq!(purchase.name, "");
        assert_eq!(purchase.label(), "$5.00");
    }

    #[test]
    fn test_malformed_labels() {
        assert!(parse_label("Lunch 9.99").unwrap_err().is_malformed_entry());
        assert!(parse_label("Lunch $").unwrap_err().is_malformed_entry());
        assert!(parse_label("Lunch $abc").unwrap_err().is_malformed_entry());
        assert!(parse_label("Refund $-5").unwrap_err().is_malformed_entry());
    }

    #[test]
    fn test_line_breaks_rejected() {
        assert!(parse_label("Tea\nbag $1").unwrap_err().is_malformed_entry());
        assert!(parse_label("Tea\r\nbag $1").unwrap_err().is_malformed_entry());
        assert!(parse_label("Tea $1\n").unwrap_err().is_malformed_entry());
    }

    #[test]
    fn test_leading_whitespace_and_separators_kept_in_name() {
        let (name, price) = parse_label("  Lunch at 12:30 $ $8").unwrap();
        assert_eq!(name, "  Lunch at 12:30 $");
        assert_eq!(price.cents(), 800);
    }
}
