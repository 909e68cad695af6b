//! Text encoding of a ledger
//!
//! The persisted form is one balance line followed by one line per purchase:
//!
//! ```text
//! Balance:90.01
//! FOOD:Lunch $9.99
//! CLOTHES:Jacket $89.99
//! ```
//!
//! Decoding merges into an existing ledger. Balance lines add to the balance
//! and purchase lines are merged by label, so loading the same text twice
//! doubles the balance but not the purchases. Neither `:` nor `$` is escaped.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Ledger, Money, Purchase};

/// Field separator between the line key and its value
pub const FIELD_SEPARATOR: char = ':';

/// Key of the balance line (matched case-insensitively on decode)
pub const BALANCE_KEY: &str = "Balance";

/// How decoding reacts to a line it cannot understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Stop at the first bad line with a parse error; earlier lines stay applied
    #[default]
    Strict,
    /// Skip bad lines and report them in the summary
    Lenient,
}

/// A line that lenient decoding skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    /// The line as read
    pub content: String,
    /// Why it was rejected
    pub reason: String,
}

/// What a decode merged into the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Sum of all balance lines
    pub balance_added: Money,
    /// Purchase lines merged (including ones that replaced an existing label)
    pub purchases_merged: usize,
    /// Purchase lines that replaced an existing label
    pub purchases_replaced: usize,
    /// Lines skipped in lenient mode
    pub skipped: Vec<SkippedLine>,
}

/// Encode a ledger in its persisted text form
pub fn encode(ledger: &Ledger) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}{}{}\n",
        BALANCE_KEY,
        FIELD_SEPARATOR,
        ledger.balance_display()
    ));

    for purchase in ledger.purchases() {
        output.push_str(&encode_purchase(purchase));
        output.push('\n');
    }

    output
}

/// Encode a single purchase line (without the newline)
pub fn encode_purchase(purchase: &Purchase) -> String {
    format!(
        "{}{}{}",
        purchase.category.name(),
        FIELD_SEPARATOR,
        purchase.label()
    )
}

/// Decode persisted text and merge it into `ledger`
pub fn decode_into(ledger: &mut Ledger, text: &str, mode: LoadMode) -> LedgerResult<LoadSummary> {
    let mut summary = LoadSummary::default();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let applied = match decode_line(raw) {
            Ok(DecodedLine::Balance(amount)) => ledger
                .add_income(amount)
                .map(|()| summary.balance_added = summary.balance_added.saturating_add(amount))
                .map_err(|e| e.to_string()),
            Ok(DecodedLine::Purchase(purchase)) => {
                if ledger.merge_purchase(purchase).is_some() {
                    summary.purchases_replaced += 1;
                }
                summary.purchases_merged += 1;
                Ok(())
            }
            Err(reason) => Err(reason),
        };

        if let Err(reason) = applied {
            match mode {
                LoadMode::Strict => return Err(LedgerError::parse(line_number, raw, reason)),
                LoadMode::Lenient => summary.skipped.push(SkippedLine {
                    line: line_number,
                    content: raw.to_string(),
                    reason,
                }),
            }
        }
    }

    Ok(summary)
}

/// Decode persisted text into a fresh ledger (strict mode)
pub fn decode(text: &str) -> LedgerResult<Ledger> {
    let mut ledger = Ledger::new();
    decode_into(&mut ledger, text, LoadMode::Strict)?;
    Ok(ledger)
}

enum DecodedLine {
    Balance(Money),
    Purchase(Purchase),
}

fn decode_line(line: &str) -> Result<DecodedLine, String> {
    let (key, value) = line
        .split_once(FIELD_SEPARATOR)
        .ok_or_else(|| format!("missing '{}' separator", FIELD_SEPARATOR))?;

    if key.trim().eq_ignore_ascii_case(BALANCE_KEY) {
        let amount = Money::parse(value).map_err(|e| e.to_string())?;
        return Ok(DecodedLine::Balance(amount));
    }

    let category = Category::from_name(key).map_err(|e| e.to_string())?;
    let purchase = Purchase::from_label(value, category).map_err(|e| e.to_string())?;
    Ok(DecodedLine::Purchase(purchase))
}
