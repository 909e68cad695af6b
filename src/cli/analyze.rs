//! Analyze CLI commands
//!
//! Sorted views over the session ledger.

use clap::Subcommand;

use crate::display::{
    format_category_listing, format_category_totals, format_purchases_with_total,
    EMPTY_LIST_MESSAGE,
};
use crate::error::LedgerResult;
use crate::models::Category;
use crate::reports::{purchases_for_category, sort_descending, CategoryTotals};

use super::session::Session;

/// Analyze subcommands
#[derive(Subcommand, Debug)]
pub enum AnalyzeCommands {
    /// Sort all purchases by price, most expensive first
    All,

    /// Show total spending per category, largest first
    #[command(alias = "by-type")]
    Types,

    /// Sort the purchases of one category
    #[command(alias = "type")]
    Category {
        /// Category code (1-4) or name
        category: String,
    },
}

/// Handle an analyze command
pub fn handle_analyze_command(session: &Session, cmd: AnalyzeCommands) -> LedgerResult<()> {
    let symbol = session.symbol();

    match cmd {
        AnalyzeCommands::All => {
            let sorted = sort_descending(session.ledger.purchases());
            if sorted.is_empty() {
                println!("{}", EMPTY_LIST_MESSAGE);
            } else {
                println!("{}", format_purchases_with_total("All", sorted, symbol));
            }
        }

        AnalyzeCommands::Types => {
            let totals = CategoryTotals::generate(&session.ledger);
            println!("{}", format_category_totals(&totals, symbol));
        }

        AnalyzeCommands::Category { category } => {
            let category = Category::parse_selector(&category)?;
            let listing = purchases_for_category(&session.ledger, category.code())?;
            println!("{}", format_category_listing(category, &listing, symbol));
        }
    }

    Ok(())
}
