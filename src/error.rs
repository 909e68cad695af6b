//! Custom error types for the budget ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Purchase text that does not split into `<name> $<price>`
    #[error("Malformed purchase entry: {0}")]
    MalformedEntry(String),

    /// Purchase price exceeds the current balance
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// Category code or name outside the fixed taxonomy
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Persistence file is missing or unreadable
    #[error("File unavailable: {0}")]
    FileUnavailable(String),

    /// A persisted line could not be decoded
    #[error("Parse error at line {line} ({reason}): {content}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Backup errors
    #[error("Backup error: {0}")]
    Backup(String),
}

impl LedgerError {
    /// Create an "unknown category" error for a numeric code
    pub fn unknown_code(code: impl std::fmt::Display) -> Self {
        Self::UnknownCategory(format!("code {}", code))
    }

    /// Create a parse error for a persisted line (1-based line number)
    pub fn parse(line: usize, content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a malformed purchase entry
    pub fn is_malformed_entry(&self) -> bool {
        matches!(self, Self::MalformedEntry(_))
    }

    /// Check if this is a business-rule rejection for lack of funds
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }

    /// Check if this is an unknown category error
    pub fn is_unknown_category(&self) -> bool {
        matches!(self, Self::UnknownCategory(_))
    }

    /// Check if this means "nothing to load"
    pub fn is_file_unavailable(&self) -> bool {
        matches!(self, Self::FileUnavailable(_))
    }

    /// Check if this is a persisted-line parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
