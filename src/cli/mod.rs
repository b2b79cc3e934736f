//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::storage::STORE_DATE_FORMAT;

/// Parse an amount argument (e.g., "500" or "25.50")
pub(crate) fn parse_amount(what: &str, input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|e| BudgetError::MalformedInput(format!("Invalid {}: {}", what, e)))
}

/// Parse a date argument, always YYYY-MM-DD
pub(crate) fn parse_date(input: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), STORE_DATE_FORMAT).map_err(|_| {
        BudgetError::MalformedInput(format!("Invalid date: {}. Use YYYY-MM-DD", input))
    })
}
