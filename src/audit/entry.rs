//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::{Money, Purchase};
use crate::storage::LoadSummary;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Income added to the balance
    Income,
    /// Purchase recorded
    Purchase,
    /// Purchase refused (malformed or unaffordable)
    PurchaseRejected,
    /// Ledger file merged into the session
    Load,
    /// Session written to a ledger file
    Save,
    /// Session ledger replaced from a backup
    Restore,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Operation::Income => "INCOME",
            Operation::Purchase => "PURCHASE",
            Operation::PurchaseRejected => "REJECTED",
            Operation::Load => "LOAD",
            Operation::Save => "SAVE",
            Operation::Restore => "RESTORE",
        };
        f.pad(label)
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Human-readable one-line description
    pub summary: String,

    /// Balance after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_after: Option<Money>,

    /// Structured details of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry with no balance or details
    pub fn new(operation: Operation, summary: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            summary: summary.into(),
            balance_after: None,
            details: None,
        }
    }

    /// Attach the resulting balance
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance_after = Some(balance);
        self
    }

    /// Attach structured details
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Income added
    pub fn income(amount: Money, balance: Money) -> Self {
        Self::new(Operation::Income, format!("Added income {}", amount))
            .with_balance(balance)
            .with_details(json!({ "amount": amount }))
    }

    /// Purchase recorded
    pub fn purchase(purchase: &Purchase, balance: Money) -> Self {
        Self::new(
            Operation::Purchase,
            format!("{}: {}", purchase.category, purchase.label()),
        )
        .with_balance(balance)
        .with_details(serde_json::to_value(purchase).unwrap_or_default())
    }

    /// Purchase refused
    pub fn purchase_rejected(entry: &str, reason: &str, balance: Money) -> Self {
        Self::new(Operation::PurchaseRejected, format!("{}: {}", entry, reason))
            .with_balance(balance)
            .with_details(json!({ "entry": entry, "reason": reason }))
    }

    /// Ledger file merged into the session
    pub fn load(source: &str, summary: &LoadSummary, balance: Money) -> Self {
        Self::new(
            Operation::Load,
            format!(
                "Loaded {} purchase(s) from {}",
                summary.purchases_merged, source
            ),
        )
        .with_balance(balance)
        .with_details(json!({
            "source": source,
            "balance_added": summary.balance_added,
            "purchases_merged": summary.purchases_merged,
            "purchases_replaced": summary.purchases_replaced,
            "skipped_lines": summary.skipped.len(),
        }))
    }

    /// Session written to a file
    pub fn save(target: &str, purchase_count: usize, balance: Money) -> Self {
        Self::new(
            Operation::Save,
            format!("Saved {} purchase(s) to {}", purchase_count, target),
        )
        .with_balance(balance)
        .with_details(json!({ "target": target, "purchase_count": purchase_count }))
    }

    /// Session ledger replaced from a backup
    pub fn restore(backup: &str) -> Self {
        Self::new(Operation::Restore, format!("Restored session from {}", backup))
            .with_details(json!({ "backup": backup }))
    }

    /// Format as a single terminal line
    pub fn format_line(&self) -> String {
        let balance = self
            .balance_after
            .map(|b| format!(" (balance {})", b))
            .unwrap_or_default();
        format!(
            "{} {:<8} {}{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.summary,
            balance
        )
    }
}
