//! Ledger CLI commands
//!
//! Income, purchases, balance and the plain purchase list.

use crate::audit::AuditEntry;
use crate::display::{format_balance, format_purchase_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, PRICE_DELIMITER};

use super::session::Session;

/// Add income to the balance
pub fn handle_income(session: &mut Session, amount: &str) -> LedgerResult<()> {
    let amount = Money::parse(amount)
        .map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))?;

    session.ledger.add_income(amount)?;
    session.commit()?;
    session.record(AuditEntry::income(amount, session.ledger.balance()))?;

    println!("Income was added!");
    Ok(())
}

/// Record a purchase from separate name and price arguments
pub fn handle_purchase(
    session: &mut Session,
    category: &str,
    name: &str,
    price: &str,
) -> LedgerResult<()> {
    let category = Category::parse_selector(category)?;
    let entry = raw_entry(name, price);

    match session.ledger.add_purchase(category, &entry) {
        Ok(purchase) => {
            session.commit()?;
            session.record(AuditEntry::purchase(&purchase, session.ledger.balance()))?;
            println!("Purchase was added!");
            Ok(())
        }
        Err(e) => {
            session.record(AuditEntry::purchase_rejected(
                &entry,
                &e.to_string(),
                session.ledger.balance(),
            ))?;
            if e.is_insufficient_funds() {
                println!("Not enough income to add this purchase: {}", entry);
            }
            Err(e)
        }
    }
}

/// Show the balance
pub fn handle_balance(session: &Session) -> LedgerResult<()> {
    println!("{}", format_balance(session.ledger.balance(), session.symbol()));
    Ok(())
}

/// Show stored purchases in insertion order, for one category or all
pub fn handle_list(session: &Session, category: Option<&str>) -> LedgerResult<()> {
    let category = category.map(Category::parse_selector).transpose()?;
    println!(
        "{}",
        format_purchase_list(&session.ledger, category, session.symbol())
    );
    Ok(())
}

/// Join a name and price into a `"<name> $<price>"` entry
fn raw_entry(name: &str, price: &str) -> String {
    let price = price.trim();
    let price = price.strip_prefix(PRICE_DELIMITER).unwrap_or(price);
    format!("{} {}{}", name.trim(), PRICE_DELIMITER, price)
}
