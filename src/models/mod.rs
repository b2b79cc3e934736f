//! Core data models for the budget tracker
//!
//! This module contains the data structures of the ledger domain: money,
//! categories with their limits, and transactions.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::{validate_name, Category, CategoryValidationError, DefaultCategory};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, NO_DESCRIPTION};
