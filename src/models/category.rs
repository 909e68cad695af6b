//! Spending categories
//!
//! The taxonomy is a closed set of four categories, each with a stable numeric
//! code used in menus, on the command line and in the persisted file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Food,
    Clothes,
    Entertainment,
    Other,
}

impl Category {
    /// Get all categories in code order
    pub fn all() -> &'static [Self] {
        &[Self::Food, Self::Clothes, Self::Entertainment, Self::Other]
    }

    /// Stable numeric code (1-4)
    pub const fn code(self) -> u8 {
        match self {
            Self::Food => 1,
            Self::Clothes => 2,
            Self::Entertainment => 3,
            Self::Other => 4,
        }
    }

    /// Look up a category by its numeric code
    pub fn from_code(code: u8) -> LedgerResult<Self> {
        match code {
            1 => Ok(Self::Food),
            2 => Ok(Self::Clothes),
            3 => Ok(Self::Entertainment),
            4 => Ok(Self::Other),
            other => Err(LedgerError::unknown_code(other)),
        }
    }

    /// Look up a category by name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> LedgerResult<Self> {
        let trimmed = name.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "FOOD" => Ok(Self::Food),
            "CLOTHES" => Ok(Self::Clothes),
            "ENTERTAINMENT" => Ok(Self::Entertainment),
            "OTHER" => Ok(Self::Other),
            _ => Err(LedgerError::UnknownCategory(trimmed.to_string())),
        }
    }

    /// Get the code for a category name
    pub fn code_of(name: &str) -> LedgerResult<u8> {
        Self::from_name(name).map(Self::code)
    }

    /// Parse either a numeric code ("1") or a name ("food")
    pub fn parse_selector(selector: &str) -> LedgerResult<Self> {
        let trimmed = selector.trim();
        match trimmed.parse::<u8>() {
            Ok(code) => Self::from_code(code),
            Err(_) if trimmed.bytes().all(|b| b.is_ascii_digit()) && !trimmed.is_empty() => {
                Err(LedgerError::unknown_code(trimmed))
            }
            Err(_) => Self::from_name(trimmed),
        }
    }

    /// Persisted name ("FOOD")
    pub const fn name(self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Clothes => "CLOTHES",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Other => "OTHER",
        }
    }

    /// Human-facing name ("Food")
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Clothes => "Clothes",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<u8> for Category {
    type Error = LedgerError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
