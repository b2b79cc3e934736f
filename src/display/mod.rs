//! Display formatting for terminal output
//!
//! Plain-text tables for categories and transactions. Report layouts live
//! with the reports themselves.

pub mod category;
pub mod transaction;

pub use category::{format_category_details, format_category_table};
pub use transaction::{format_recorded, format_transaction_row, format_transaction_table};
