//! Export module for the budget ledger
//!
//! Provides data export in multiple formats:
//! - CSV: purchases, one row each (spreadsheet-compatible)
//! - JSON: machine-readable snapshot with totals
//! - YAML: human-readable snapshot with totals

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_purchases_csv;
pub use json::{export_json, ExportedPurchase, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// File extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(LedgerError::Validation(format!(
                "Unknown export format '{}'. Use csv, json or yaml",
                other
            ))),
        }
    }
}
